use std::sync::Arc;

use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::repository::{ProjectStore, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOutcome {
    Completed,
    UserNotFound,
    ProjectNotFound,
    Failed,
}

/// Project membership operations (join/leave). User and project are both
/// verified before the membership row is touched; the user check runs first.
pub struct MembershipService {
    users: Arc<dyn UserStore>,
    projects: Arc<dyn ProjectStore>,
}

impl MembershipService {
    pub fn new(users: Arc<dyn UserStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self { users, projects }
    }

    pub async fn join(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<MembershipOutcome, DatabaseError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Ok(MembershipOutcome::UserNotFound);
        }
        if self.projects.find_by_id(project_id).await?.is_none() {
            return Ok(MembershipOutcome::ProjectNotFound);
        }
        // Joining twice is the "join failed" case
        if self.projects.add_member(user_id, project_id).await? {
            Ok(MembershipOutcome::Completed)
        } else {
            Ok(MembershipOutcome::Failed)
        }
    }

    pub async fn leave(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<MembershipOutcome, DatabaseError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Ok(MembershipOutcome::UserNotFound);
        }
        if self.projects.find_by_id(project_id).await?.is_none() {
            return Ok(MembershipOutcome::ProjectNotFound);
        }
        // Leaving a project the user never joined is the "leave failed" case
        if self.projects.remove_member(user_id, project_id).await? {
            Ok(MembershipOutcome::Completed)
        } else {
            Ok(MembershipOutcome::Failed)
        }
    }
}
