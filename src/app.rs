use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{courses, projects, schedules, users};
use crate::repository::{
    CourseStore, PgCourseStore, PgProjectStore, PgScheduleStore, PgUserStore, ProjectStore,
    ScheduleStore, UserStore,
};
use crate::services::{AccountService, CourseService, LogMailer, Mailer, MembershipService};

/// Injected per-entity stores and the mailer. Handlers and services only see
/// the trait objects, so tests substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub courses: Arc<dyn CourseStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub schedules: Arc<dyn ScheduleStore>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            courses: Arc::new(PgCourseStore::new(pool.clone())),
            projects: Arc::new(PgProjectStore::new(pool.clone())),
            schedules: Arc::new(PgScheduleStore::new(pool)),
            mailer: Arc::new(LogMailer),
        }
    }

    pub fn account_service(&self) -> AccountService {
        AccountService::new(self.users.clone(), self.mailer.clone())
    }

    pub fn membership_service(&self) -> MembershipService {
        MembershipService::new(self.users.clone(), self.projects.clone())
    }

    pub fn course_service(&self) -> CourseService {
        CourseService::new(self.courses.clone(), self.projects.clone())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // API
        .merge(user_routes())
        .merge(course_routes())
        .merge(project_routes())
        .merge(schedule_routes())
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users/:user_mail/github-username",
            get(users::github_username),
        )
        .route("/api/users/:user_mail/email", put(users::change_email))
        .route("/api/users/:user_mail/password", put(users::change_password))
        // Both reset routes are intentionally bound to the same handler
        .route(
            "/api/users/:user_mail/reset-password",
            post(users::send_password_reset_email),
        )
        .route(
            "/api/users/:user_mail/password-reset-email",
            post(users::send_password_reset_email),
        )
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/api/courses", post(courses::create_course))
        .route(
            "/api/courses/:course_id/projects",
            post(courses::create_course_project),
        )
        .route("/api/courses/users", get(courses::get_user_courses))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users/:user_id/projects/:course_project_id/join",
            post(projects::join_project),
        )
        .route(
            "/api/users/:user_id/projects/:course_project_id/leave",
            delete(projects::leave_project),
        )
}

fn schedule_routes() -> Router<AppState> {
    Router::new().route("/api/schedules/:schedule_id", get(schedules::get_schedule))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Courseboard API",
        "version": version,
        "description": "Course and project management API",
        "endpoints": {
            "courses": "POST /api/courses, POST /api/courses/:courseId/projects, GET /api/courses/users?projectName=",
            "users": "GET /api/users/:userMail/github-username, PUT /api/users/:userMail/email, PUT /api/users/:userMail/password",
            "password_reset": "POST /api/users/:userMail/reset-password, POST /api/users/:userMail/password-reset-email",
            "membership": "POST /api/users/:userId/projects/:courseProjectId/join, DELETE /api/users/:userId/projects/:courseProjectId/leave",
            "schedules": "GET /api/schedules/:scheduleId",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "message": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "message": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
