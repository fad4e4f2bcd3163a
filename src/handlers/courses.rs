use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_uuid;
use crate::app::AppState;
use crate::error::ApiError;
use crate::services::CourseOutcome;

#[derive(Debug, Deserialize)]
pub struct CreateCourseBody {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserCoursesQuery {
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
}

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseBody>,
) -> Result<Json<Value>, ApiError> {
    match state
        .course_service()
        .create_course(&body.name, body.description)
        .await?
    {
        CourseOutcome::Created => Ok(Json(json!({ "message": "Course created successfully" }))),
        _ => Err(ApiError::operation_failed("Course create failed")),
    }
}

/// POST /api/courses/:course_id/projects
pub async fn create_course_project(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<CreateProjectBody>,
) -> Result<Json<Value>, ApiError> {
    let course_id = parse_uuid(&course_id, "Invalid course id")?;

    match state
        .course_service()
        .create_project(course_id, &body.name, body.description)
        .await?
    {
        CourseOutcome::Created => Ok(Json(
            json!({ "message": "Course project created successfully" }),
        )),
        CourseOutcome::CourseNotFound => Err(ApiError::not_found("Course not found")),
        CourseOutcome::Failed => Err(ApiError::operation_failed("Course project create failed")),
    }
}

/// GET /api/courses/users?projectName=...
///
/// A missing query value falls through to the not-found path; clients that
/// omit `projectName` get the same answer as an unknown name.
pub async fn get_user_courses(
    State(state): State<AppState>,
    Query(query): Query<UserCoursesQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(project_name) = query.project_name else {
        return Err(ApiError::not_found("Course not found"));
    };

    match state.course_service().user_courses(&project_name).await? {
        Some(courses) => Ok(Json(json!({
            "message": "User courses fetched successfully",
            "courses": courses,
        }))),
        None => Err(ApiError::not_found("Course not found")),
    }
}
