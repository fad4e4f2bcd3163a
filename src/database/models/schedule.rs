use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Schedule data associated with a course. Stored in the "schedules" table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseSchedule {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
}
