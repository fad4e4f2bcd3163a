use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project scoped to a course, with a membership list of users.
/// Stored in the "project" table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseProject {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A user-project membership row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMember {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub joined_at: DateTime<Utc>,
}
