pub mod course;
pub mod project;
pub mod schedule;
pub mod user;

pub use course::{Course, UserCourse};
pub use project::{CourseProject, ProjectMember};
pub use schedule::CourseSchedule;
pub use user::User;
