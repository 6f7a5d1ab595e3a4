//! Notification dispatch with an explicit error boundary.
//!
//! Every method here is best-effort **by design**: the primary state change
//! (token persisted, interest recorded, password changed) has already
//! committed, so delivery failures are logged and swallowed rather than
//! surfaced to the caller.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use varanbook_core::config::email::EmailConfig;
use varanbook_core::traits::mailer::{EmailTemplate, Mailer};
use varanbook_core::traits::queue::{JobQueue, NotificationJob};

/// Dispatches email and push notifications, never propagating failures.
#[derive(Clone)]
pub struct NotificationService {
    mailer: Arc<dyn Mailer>,
    queue: Arc<dyn JobQueue>,
    config: EmailConfig,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService").finish()
    }
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(mailer: Arc<dyn Mailer>, queue: Arc<dyn JobQueue>, config: EmailConfig) -> Self {
        Self {
            mailer,
            queue,
            config,
        }
    }

    /// Email a password reset link. Outcome ignored by design: the reset
    /// token is already persisted, and the caller must receive 204 either
    /// way to prevent account enumeration.
    pub async fn send_password_reset(&self, to: &str, raw_token: &str) {
        let link = format!("{}/reset-password?token={raw_token}", self.config.frontend_url);
        let params = serde_json::json!({ "reset_link": link });

        if let Err(e) = self
            .mailer
            .send(to, EmailTemplate::PasswordReset, params)
            .await
        {
            warn!(error = %e, "Password reset email failed; not surfaced to caller");
        }
    }

    /// Send a welcome mail after registration. Outcome ignored by design.
    pub async fn send_welcome(&self, to: &str, full_name: &str) {
        let params = serde_json::json!({ "full_name": full_name });

        if let Err(e) = self.mailer.send(to, EmailTemplate::Welcome, params).await {
            warn!(error = %e, "Welcome email failed; not surfaced to caller");
        }
    }

    /// Queue a push notification about a received interest. Outcome ignored
    /// by design.
    pub async fn push_interest_received(&self, tenant_id: Uuid, user_id: Uuid, interest_id: Uuid) {
        let job = NotificationJob {
            tenant_id,
            user_id,
            title: "New interest received".to_string(),
            body: "Someone has shortlisted your profile.".to_string(),
            data: serde_json::json!({ "interest_id": interest_id }),
        };

        if let Err(e) = self.queue.enqueue(job).await {
            warn!(error = %e, "Interest push enqueue failed; not surfaced to caller");
        }
    }

    /// Queue a push notification about an answered interest. Outcome
    /// ignored by design.
    pub async fn push_interest_answered(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        interest_id: Uuid,
        accepted: bool,
    ) {
        let job = NotificationJob {
            tenant_id,
            user_id,
            title: if accepted {
                "Interest accepted".to_string()
            } else {
                "Interest declined".to_string()
            },
            body: "There is an update on an interest you sent.".to_string(),
            data: serde_json::json!({ "interest_id": interest_id, "accepted": accepted }),
        };

        if let Err(e) = self.queue.enqueue(job).await {
            warn!(error = %e, "Interest push enqueue failed; not surfaced to caller");
        }
    }
}
