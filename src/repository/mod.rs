//! Per-entity stores. Each store issues parameterized point queries against
//! a fixed table and returns `Ok(None)` when no row matches - absence is a
//! normal outcome the caller checks, never an error.

pub mod courses;
pub mod projects;
pub mod schedules;
pub mod users;

pub use courses::{CourseStore, PgCourseStore};
pub use projects::{PgProjectStore, ProjectStore};
pub use schedules::{PgScheduleStore, ScheduleStore};
pub use users::{PgUserStore, UserStore};
