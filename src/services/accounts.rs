use std::sync::Arc;

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::repository::UserStore;
use crate::services::mailer::Mailer;

/// Result of an account operation. `Failed` covers the rejected-but-handled
/// cases (empty input, address taken, delivery error); store errors stay in
/// the `Err` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOutcome {
    Completed,
    UserNotFound,
    Failed,
}

/// Account operations: email/password changes and password reset issuance.
/// Computes a result only; writing the HTTP response is the handler's job.
pub struct AccountService {
    users: Arc<dyn UserStore>,
    mailer: Arc<dyn Mailer>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, mailer: Arc<dyn Mailer>) -> Self {
        Self { users, mailer }
    }

    pub async fn change_email(
        &self,
        user_mail: &str,
        new_email: &str,
    ) -> Result<AccountOutcome, DatabaseError> {
        let Some(user) = self.users.find_by_email(user_mail).await? else {
            return Ok(AccountOutcome::UserNotFound);
        };
        if new_email.trim().is_empty() {
            return Ok(AccountOutcome::Failed);
        }
        if self.users.update_email(user.id, new_email).await? {
            Ok(AccountOutcome::Completed)
        } else {
            Ok(AccountOutcome::Failed)
        }
    }

    pub async fn change_password(
        &self,
        user_mail: &str,
        new_password: &str,
    ) -> Result<AccountOutcome, DatabaseError> {
        let Some(user) = self.users.find_by_email(user_mail).await? else {
            return Ok(AccountOutcome::UserNotFound);
        };
        if new_password.is_empty() {
            return Ok(AccountOutcome::Failed);
        }
        let hash = hash_password(new_password);
        if self.users.update_password(user.id, &hash).await? {
            Ok(AccountOutcome::Completed)
        } else {
            Ok(AccountOutcome::Failed)
        }
    }

    /// Issue a fresh reset token for the user and mail it to `recipient`.
    /// The recipient comes from the request body and need not match the
    /// account's stored address.
    pub async fn send_password_reset(
        &self,
        user_mail: &str,
        recipient: &str,
    ) -> Result<AccountOutcome, DatabaseError> {
        let Some(user) = self.users.find_by_email(user_mail).await? else {
            return Ok(AccountOutcome::UserNotFound);
        };

        let token = Uuid::new_v4();
        let ttl = crate::config::config().mail.reset_token_ttl_hours;
        let expires_at = Utc::now() + Duration::hours(ttl);
        self.users
            .insert_reset_token(user.id, token, expires_at)
            .await?;

        let body = format!(
            "A password reset was requested for your account.\n\
             Reset token: {token}\n\
             The token expires at {expires_at}."
        );
        match self.mailer.send(recipient, "Password reset", &body).await {
            Ok(()) => Ok(AccountOutcome::Completed),
            Err(e) => {
                tracing::warn!(user_id = %user.id, "password reset mail failed: {}", e);
                Ok(AccountOutcome::Failed)
            }
        }
    }
}

/// SHA-256 hex digest of the password
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let hash = hasher.finalize();
    format!("{:x}", hash)
}
