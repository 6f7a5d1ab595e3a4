//! Notification job queue trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// A queued push-notification job.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NotificationJob {
    /// Tenant the recipient belongs to.
    pub tenant_id: Uuid,
    /// Recipient user.
    pub user_id: Uuid,
    /// Short notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Arbitrary payload forwarded to the push provider.
    pub data: serde_json::Value,
}

/// Trait for the queue that decouples notification delivery from the
/// request path. Delivery itself happens in an external worker.
#[async_trait]
pub trait JobQueue: Send + Sync + 'static {
    /// Enqueue a single job, returning its queue ID.
    async fn enqueue(&self, job: NotificationJob) -> AppResult<Uuid>;

    /// Enqueue a batch of jobs, returning their queue IDs.
    async fn enqueue_bulk(&self, jobs: Vec<NotificationJob>) -> AppResult<Vec<Uuid>>;
}
