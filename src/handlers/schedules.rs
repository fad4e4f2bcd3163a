use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::parse_uuid;
use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/schedules/:schedule_id
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let schedule_id = parse_uuid(&schedule_id, "Invalid schedule id")?;

    let Some(schedule) = state.schedules.find_by_id(schedule_id).await? else {
        return Err(ApiError::not_found("Schedule not found"));
    };
    Ok(Json(json!({
        "message": "Schedule fetched successfully",
        "schedule": schedule,
    })))
}
