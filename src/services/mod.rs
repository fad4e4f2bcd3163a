pub mod accounts;
pub mod courses;
pub mod mailer;
pub mod membership;

pub use accounts::{AccountOutcome, AccountService};
pub use courses::{CourseOutcome, CourseService};
pub use mailer::{LogMailer, MailError, Mailer};
pub use membership::{MembershipOutcome, MembershipService};
