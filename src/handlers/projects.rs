use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::parse_uuid;
use crate::app::AppState;
use crate::error::ApiError;
use crate::services::MembershipOutcome;

/// POST /api/users/:user_id/projects/:course_project_id/join
pub async fn join_project(
    State(state): State<AppState>,
    Path((user_id, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_uuid(&user_id, "Invalid user id")?;
    let project_id = parse_uuid(&project_id, "Invalid course project id")?;

    match state.membership_service().join(user_id, project_id).await? {
        MembershipOutcome::Completed => Ok(Json(json!({ "message": "Project join successful" }))),
        MembershipOutcome::UserNotFound => Err(ApiError::not_found("User not found")),
        MembershipOutcome::ProjectNotFound => {
            Err(ApiError::not_found("Course project not found"))
        }
        MembershipOutcome::Failed => Err(ApiError::operation_failed("Project join failed")),
    }
}

/// DELETE /api/users/:user_id/projects/:course_project_id/leave
pub async fn leave_project(
    State(state): State<AppState>,
    Path((user_id, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_uuid(&user_id, "Invalid user id")?;
    let project_id = parse_uuid(&project_id, "Invalid course project id")?;

    match state.membership_service().leave(user_id, project_id).await? {
        MembershipOutcome::Completed => Ok(Json(json!({ "message": "Project leave successful" }))),
        MembershipOutcome::UserNotFound => Err(ApiError::not_found("User not found")),
        MembershipOutcome::ProjectNotFound => {
            Err(ApiError::not_found("Course project not found"))
        }
        MembershipOutcome::Failed => Err(ApiError::operation_failed("Project leave failed")),
    }
}
