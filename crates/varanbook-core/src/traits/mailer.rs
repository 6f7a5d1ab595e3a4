//! Transactional email delivery trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Named email templates known to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    /// Password reset link with a single-use token.
    PasswordReset,
    /// Welcome mail after member registration.
    Welcome,
}

/// Trait for transactional email backends.
///
/// Callers on the primary request path must treat delivery as best-effort:
/// failures are logged, never propagated (see the notification service).
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send a templated email to a single recipient.
    async fn send(
        &self,
        to: &str,
        template: EmailTemplate,
        params: serde_json::Value,
    ) -> AppResult<()>;
}
