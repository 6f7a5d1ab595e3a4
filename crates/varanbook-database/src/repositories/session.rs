//! Refresh session repository implementation.
//!
//! The session ledger: one row per issued refresh token, keyed by hash.
//! Rotation and revocation are the only writes; rows are never deleted so
//! the table remains a complete audit trail. The expiry sweep is an
//! external job working off `is_revoked` / `expires_at`.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_entity::session::RefreshSession;

/// Repository for the refresh session ledger.
#[derive(Debug, Clone)]
pub struct RefreshSessionRepository {
    pool: PgPool,
}

impl RefreshSessionRepository {
    /// Create a new refresh session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly issued session.
    pub async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        device_info: Option<&str>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshSession> {
        sqlx::query_as::<_, RefreshSession>(
            "INSERT INTO refresh_sessions (user_id, token_hash, device_info, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(device_info)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find the unrevoked session with the given hash and lock the row.
    ///
    /// The `FOR UPDATE` lock is what makes rotation race-free: of two
    /// concurrent rotations of the same token, the second blocks here and
    /// then observes the row already revoked.
    pub async fn find_active_by_hash_for_update(
        &self,
        conn: &mut PgConnection,
        token_hash: &str,
    ) -> AppResult<Option<RefreshSession>> {
        sqlx::query_as::<_, RefreshSession>(
            "SELECT * FROM refresh_sessions \
             WHERE token_hash = $1 AND is_revoked = FALSE FOR UPDATE",
        )
        .bind(token_hash)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by hash", e)
        })
    }

    /// Revoke a locked session row and stamp its last use.
    pub async fn revoke_by_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        used_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE refresh_sessions SET is_revoked = TRUE, last_used_at = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(used_at)
        .execute(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke session", e))?;
        Ok(())
    }

    /// Insert the successor row of a rotation, inside the same transaction
    /// that revoked its predecessor.
    pub async fn create_in(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        token_hash: &str,
        device_info: Option<&str>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshSession> {
        sqlx::query_as::<_, RefreshSession>(
            "INSERT INTO refresh_sessions (user_id, token_hash, device_info, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(device_info)
        .bind(expires_at)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Revoke by hash. Idempotent: unknown or already-revoked hashes are a
    /// silent no-op, so logout never errors on a stale token.
    pub async fn revoke_by_hash(&self, token_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE refresh_sessions SET is_revoked = TRUE WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke session", e)
            })?;
        Ok(())
    }

    /// Revoke every outstanding session for a user (password reset, admin
    /// deactivation).
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE refresh_sessions SET is_revoked = TRUE \
             WHERE user_id = $1 AND is_revoked = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to revoke user sessions", e)
        })?;
        Ok(result.rows_affected())
    }

    /// List active (unrevoked, unexpired) sessions for a user.
    pub async fn find_active_by_user(&self, user_id: Uuid) -> AppResult<Vec<RefreshSession>> {
        sqlx::query_as::<_, RefreshSession>(
            "SELECT * FROM refresh_sessions \
             WHERE user_id = $1 AND is_revoked = FALSE AND expires_at > NOW() \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active sessions", e)
        })
    }
}
