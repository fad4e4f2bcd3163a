use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::AccountOutcome;

#[derive(Debug, Deserialize)]
pub struct EmailChangeBody {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordChangeBody {
    pub password: String,
}

/// GET /api/users/:user_mail/github-username
pub async fn github_username(
    State(state): State<AppState>,
    Path(user_mail): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let Some(user) = state.users.find_by_email(&user_mail).await? else {
        return Err(ApiError::not_found("User not found"));
    };
    Ok(Json(json!({
        "message": "Github username fetched successfully",
        "username": user.github_username,
    })))
}

/// PUT /api/users/:user_mail/email
pub async fn change_email(
    State(state): State<AppState>,
    Path(user_mail): Path<String>,
    Json(body): Json<EmailChangeBody>,
) -> Result<Json<Value>, ApiError> {
    match state
        .account_service()
        .change_email(&user_mail, &body.email)
        .await?
    {
        AccountOutcome::Completed => Ok(Json(json!({ "message": "Email changed successfully" }))),
        AccountOutcome::UserNotFound => Err(ApiError::not_found("User not found")),
        AccountOutcome::Failed => Err(ApiError::operation_failed("Email change failed")),
    }
}

/// PUT /api/users/:user_mail/password
pub async fn change_password(
    State(state): State<AppState>,
    Path(user_mail): Path<String>,
    Json(body): Json<PasswordChangeBody>,
) -> Result<Json<Value>, ApiError> {
    match state
        .account_service()
        .change_password(&user_mail, &body.password)
        .await?
    {
        AccountOutcome::Completed => {
            Ok(Json(json!({ "message": "Password changed successfully" })))
        }
        AccountOutcome::UserNotFound => Err(ApiError::not_found("User not found")),
        AccountOutcome::Failed => Err(ApiError::operation_failed("Password change failed")),
    }
}

/// POST /api/users/:user_mail/reset-password and
/// POST /api/users/:user_mail/password-reset-email
///
/// Two routes, one handler: both endpoints behave identically, so both are
/// bound to the same function.
pub async fn send_password_reset_email(
    State(state): State<AppState>,
    Path(user_mail): Path<String>,
    Json(body): Json<EmailChangeBody>,
) -> Result<Json<Value>, ApiError> {
    match state
        .account_service()
        .send_password_reset(&user_mail, &body.email)
        .await?
    {
        AccountOutcome::Completed => Ok(Json(
            json!({ "message": "Password reset email sent successfully" }),
        )),
        AccountOutcome::UserNotFound => Err(ApiError::not_found("User not found")),
        AccountOutcome::Failed => Err(ApiError::operation_failed("Password reset email failed")),
    }
}
