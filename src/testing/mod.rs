//! In-memory store fakes and fixtures for unit tests. Compiled only for
//! tests; production code always goes through the Postgres stores.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, CourseProject, CourseSchedule, User, UserCourse};
use crate::repository::{CourseStore, ProjectStore, ScheduleStore, UserStore};
use crate::services::mailer::{MailError, Mailer};

// ---------------------------------------------------------------------------
// Fixtures

pub fn user_fixture(email: &str, github_username: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        github_username: github_username.to_string(),
        password_hash: crate::services::accounts::hash_password("initial"),
        created_at: now,
        updated_at: now,
    }
}

pub fn course_fixture(name: &str) -> Course {
    Course {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

pub fn project_fixture(course_id: Uuid, name: &str) -> CourseProject {
    CourseProject {
        id: Uuid::new_v4(),
        course_id,
        name: name.to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

pub fn schedule_fixture(course_id: Uuid, title: &str) -> CourseSchedule {
    let now = Utc::now();
    CourseSchedule {
        id: Uuid::new_v4(),
        course_id,
        title: title.to_string(),
        starts_at: now,
        ends_at: now + chrono::Duration::hours(2),
        location: Some("HG E 1.1".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Stores

#[derive(Default, Clone)]
pub struct MemoryUserStore {
    pub users: Arc<Mutex<Vec<User>>>,
    pub tokens: Arc<Mutex<Vec<(Uuid, Uuid, DateTime<Utc>)>>>,
}

impl MemoryUserStore {
    pub fn add(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_email(&self, id: Uuid, email: &str) -> Result<bool, DatabaseError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email && u.id != id) {
            return Ok(false);
        }
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.email = email.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<bool, DatabaseError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_reset_token(
        &self,
        user_id: Uuid,
        token: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.tokens.lock().unwrap().push((user_id, token, expires_at));
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct MemoryCourseStore {
    pub courses: Arc<Mutex<Vec<Course>>>,
    pub associations: Arc<Mutex<Vec<UserCourse>>>,
}

impl MemoryCourseStore {
    pub fn add(&self, course: Course) {
        self.courses.lock().unwrap().push(course);
    }

    pub fn associate(&self, user_id: Uuid, course_id: Uuid, role: &str) {
        self.associations.lock().unwrap().push(UserCourse {
            user_id,
            course_id,
            role: role.to_string(),
        });
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DatabaseError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DatabaseError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn insert(&self, course: &Course) -> Result<bool, DatabaseError> {
        let mut courses = self.courses.lock().unwrap();
        if courses.iter().any(|c| c.name == course.name) {
            return Ok(false);
        }
        courses.push(course.clone());
        Ok(true)
    }

    async fn user_courses(&self, course_id: Uuid) -> Result<Vec<UserCourse>, DatabaseError> {
        Ok(self
            .associations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct MemoryProjectStore {
    pub projects: Arc<Mutex<Vec<CourseProject>>>,
    pub members: Arc<Mutex<HashSet<(Uuid, Uuid)>>>,
}

impl MemoryProjectStore {
    pub fn add(&self, project: CourseProject) {
        self.projects.lock().unwrap().push(project);
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseProject>, DatabaseError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, project: &CourseProject) -> Result<bool, DatabaseError> {
        let mut projects = self.projects.lock().unwrap();
        if projects
            .iter()
            .any(|p| p.course_id == project.course_id && p.name == project.name)
        {
            return Ok(false);
        }
        projects.push(project.clone());
        Ok(true)
    }

    async fn add_member(&self, user_id: Uuid, project_id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.members.lock().unwrap().insert((user_id, project_id)))
    }

    async fn remove_member(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        Ok(self.members.lock().unwrap().remove(&(user_id, project_id)))
    }
}

#[derive(Default, Clone)]
pub struct MemoryScheduleStore {
    pub schedules: Arc<Mutex<Vec<CourseSchedule>>>,
}

impl MemoryScheduleStore {
    pub fn add(&self, schedule: CourseSchedule) {
        self.schedules.lock().unwrap().push(schedule);
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseSchedule>, DatabaseError> {
        Ok(self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

// ---------------------------------------------------------------------------
// Mailers

/// Mailer that always fails, for exercising the delivery-failure path
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::Delivery("smtp unreachable".to_string()))
    }
}
