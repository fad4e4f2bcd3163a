use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::CourseProject;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseProject>, DatabaseError>;

    /// Insert a new project. Returns false when a project with the same name
    /// already exists in the course.
    async fn insert(&self, project: &CourseProject) -> Result<bool, DatabaseError>;

    /// Add a user to a project. Returns false when the user is already a
    /// member.
    async fn add_member(&self, user_id: Uuid, project_id: Uuid) -> Result<bool, DatabaseError>;

    /// Remove a user from a project. Returns false when the user was not a
    /// member.
    async fn remove_member(&self, user_id: Uuid, project_id: Uuid)
        -> Result<bool, DatabaseError>;
}

/// PostgreSQL implementation of ProjectStore
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseProject>, DatabaseError> {
        let row = sqlx::query_as::<_, CourseProject>("SELECT * FROM project WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, project: &CourseProject) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO project (id, course_id, name, description, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(project.id)
        .bind(project.course_id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_member(&self, user_id: Uuid, project_id: Uuid) -> Result<bool, DatabaseError> {
        let done = sqlx::query(
            "INSERT INTO project_members (user_id, project_id, joined_at) VALUES ($1, $2, now()) \
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .execute(&self.pool)
        .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn remove_member(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let done =
            sqlx::query("DELETE FROM project_members WHERE user_id = $1 AND project_id = $2")
                .bind(user_id)
                .bind(project_id)
                .execute(&self.pool)
                .await?;
        Ok(done.rows_affected() > 0)
    }
}
