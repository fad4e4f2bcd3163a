use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Log-only mailer: records the message in the log instead of delivering it.
/// Used until an SMTP transport is wired in, and in test environments.
#[derive(Debug, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, "mail delivery skipped (log-only mailer)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_mailer_always_delivers() {
        let mailer = LogMailer;
        let result = mailer
            .send("student@example.com", "Password reset", "token inside")
            .await;
        assert!(result.is_ok());
    }
}
