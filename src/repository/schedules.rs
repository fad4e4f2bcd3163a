use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::CourseSchedule;

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseSchedule>, DatabaseError>;
}

/// PostgreSQL implementation of ScheduleStore
#[derive(Debug, Clone)]
pub struct PgScheduleStore {
    pool: PgPool,
}

impl PgScheduleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseSchedule>, DatabaseError> {
        let row = sqlx::query_as::<_, CourseSchedule>("SELECT * FROM schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
