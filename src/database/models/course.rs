use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A course ("project group"): the top-level unit holding projects and
/// schedules. Stored in the "projectGroup" table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A user-course association row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserCourse {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub role: String,
}
