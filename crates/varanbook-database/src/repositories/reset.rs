//! Password reset token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_entity::reset::PasswordResetToken;

/// Repository for single-use password reset tokens.
#[derive(Debug, Clone)]
pub struct PasswordResetRepository {
    pool: PgPool,
}

impl PasswordResetRepository {
    /// Create a new password reset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly issued reset token hash.
    pub async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<PasswordResetToken> {
        sqlx::query_as::<_, PasswordResetToken>(
            "INSERT INTO password_reset_tokens (user_id, token_hash, expires_at) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reset token", e))
    }

    /// Find the unused token with the given hash and lock the row, so a
    /// token cannot be consumed twice concurrently.
    pub async fn find_unused_by_hash_for_update(
        &self,
        conn: &mut PgConnection,
        token_hash: &str,
    ) -> AppResult<Option<PasswordResetToken>> {
        sqlx::query_as::<_, PasswordResetToken>(
            "SELECT * FROM password_reset_tokens \
             WHERE token_hash = $1 AND is_used = FALSE FOR UPDATE",
        )
        .bind(token_hash)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reset token", e))
    }

    /// Mark a locked token consumed. Happens exactly once per token.
    pub async fn mark_used(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        used_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query("UPDATE password_reset_tokens SET is_used = TRUE, used_at = $2 WHERE id = $1")
            .bind(id)
            .bind(used_at)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark reset token used", e)
            })?;
        Ok(())
    }
}
