use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, CourseProject, UserCourse};
use crate::repository::{CourseStore, ProjectStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseOutcome {
    Created,
    CourseNotFound,
    Failed,
}

/// Course and project creation plus membership listing
pub struct CourseService {
    courses: Arc<dyn CourseStore>,
    projects: Arc<dyn ProjectStore>,
}

impl CourseService {
    pub fn new(courses: Arc<dyn CourseStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self { courses, projects }
    }

    pub async fn create_course(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<CourseOutcome, DatabaseError> {
        if name.trim().is_empty() {
            return Ok(CourseOutcome::Failed);
        }
        let course = Course {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description,
            created_at: Utc::now(),
        };
        if self.courses.insert(&course).await? {
            Ok(CourseOutcome::Created)
        } else {
            Ok(CourseOutcome::Failed)
        }
    }

    pub async fn create_project(
        &self,
        course_id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> Result<CourseOutcome, DatabaseError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Ok(CourseOutcome::CourseNotFound);
        }
        if name.trim().is_empty() {
            return Ok(CourseOutcome::Failed);
        }
        let project = CourseProject {
            id: Uuid::new_v4(),
            course_id,
            name: name.to_string(),
            description,
            created_at: Utc::now(),
        };
        if self.projects.insert(&project).await? {
            Ok(CourseOutcome::Created)
        } else {
            Ok(CourseOutcome::Failed)
        }
    }

    /// Resolve a course by name and return its user-course associations.
    /// `Ok(None)` means the course itself was not found.
    pub async fn user_courses(
        &self,
        course_name: &str,
    ) -> Result<Option<Vec<UserCourse>>, DatabaseError> {
        let Some(course) = self.courses.find_by_name(course_name).await? else {
            return Ok(None);
        };
        let rows = self.courses.user_courses(course.id).await?;
        Ok(Some(rows))
    }
}
