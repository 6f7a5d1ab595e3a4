//! Notification job outbox.
//!
//! Implements the [`JobQueue`] collaborator trait over a Postgres table.
//! The request path only inserts; an external worker drains the table and
//! performs the actual push delivery.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_core::traits::queue::{JobQueue, NotificationJob};

/// Postgres-backed notification job queue.
#[derive(Debug, Clone)]
pub struct NotificationJobRepository {
    pool: PgPool,
}

impl NotificationJobRepository {
    /// Create a new notification job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, job: &NotificationJob) -> AppResult<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO notification_jobs (tenant_id, user_id, title, body, data) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(job.tenant_id)
        .bind(job.user_id)
        .bind(&job.title)
        .bind(&job.body)
        .bind(&job.data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enqueue job", e))?;
        Ok(id)
    }
}

#[async_trait]
impl JobQueue for NotificationJobRepository {
    async fn enqueue(&self, job: NotificationJob) -> AppResult<Uuid> {
        self.insert(&job).await
    }

    async fn enqueue_bulk(&self, jobs: Vec<NotificationJob>) -> AppResult<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(jobs.len());
        for job in &jobs {
            ids.push(self.insert(job).await?);
        }
        Ok(ids)
    }
}
