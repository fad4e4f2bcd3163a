// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::manager::DatabaseError;

/// HTTP API error. The wire contract is deliberately small: every failure is
/// a JSON object with a `message` field, and client-caused failures
/// (missing row, rejected operation, malformed id) are all status 400.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - lookup returned no row
    NotFound(String),

    // 400 Bad Request - the domain operation reported failure
    OperationFailed(String),

    // 400 Bad Request - malformed path or query input
    BadRequest(String),

    // 500 Internal Server Error - store failure, never exposed in detail
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn operation_failed(message: impl Into<String>) -> Self {
        ApiError::OperationFailed(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::OperationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) => msg,
            ApiError::OperationFailed(msg) => msg,
            ApiError::BadRequest(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        // Log the real error but return a generic message
        tracing::error!("database error: {}", err);
        ApiError::Internal("An error occurred while processing your request".to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
