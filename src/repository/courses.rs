use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, UserCourse};

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DatabaseError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DatabaseError>;

    /// Insert a new course. Returns false when the name is already taken.
    async fn insert(&self, course: &Course) -> Result<bool, DatabaseError>;

    /// All user-course associations for a course
    async fn user_courses(&self, course_id: Uuid) -> Result<Vec<UserCourse>, DatabaseError>;
}

/// PostgreSQL implementation of CourseStore.
///
/// Courses live in the "projectGroup" table; the mixed-case name is part of
/// the existing schema, so it is quoted in every statement.
#[derive(Debug, Clone)]
pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DatabaseError> {
        let row = sqlx::query_as::<_, Course>("SELECT * FROM \"projectGroup\" WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DatabaseError> {
        let row = sqlx::query_as::<_, Course>("SELECT * FROM \"projectGroup\" WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, course: &Course) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO \"projectGroup\" (id, name, description, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn user_courses(&self, course_id: Uuid) -> Result<Vec<UserCourse>, DatabaseError> {
        let rows =
            sqlx::query_as::<_, UserCourse>("SELECT * FROM user_courses WHERE course_id = $1")
                .bind(course_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}
