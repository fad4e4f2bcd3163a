pub mod courses;
pub mod projects;
pub mod schedules;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;

/// Parse a path id, turning a malformed value into a 400 with the given
/// message instead of a framework rejection.
pub(crate) fn parse_uuid(raw: &str, message: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(message))
}
