//! Interest (shortlist) repository implementation.
//!
//! Tenant-scoped like profiles: every access runs inside a tenant-bound
//! transaction under the row security policy.

use sqlx::PgConnection;
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_entity::interest::{Interest, InterestStatus};

/// Repository for interest records.
#[derive(Debug, Clone)]
pub struct InterestRepository;

impl InterestRepository {
    /// Create a new interest repository.
    pub fn new() -> Self {
        Self
    }

    /// Find an interest by primary key.
    pub async fn find_by_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Interest>> {
        sqlx::query_as::<_, Interest>("SELECT * FROM interests WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find interest", e))
    }

    /// Express an interest. Duplicate (from, to) pairs conflict.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        tenant_id: Uuid,
        from_profile_id: Uuid,
        to_profile_id: Uuid,
        note: Option<&str>,
    ) -> AppResult<Interest> {
        sqlx::query_as::<_, Interest>(
            "INSERT INTO interests (tenant_id, from_profile_id, to_profile_id, note, status) \
             VALUES ($1, $2, $3, $4, 'shortlisted') RETURNING *",
        )
        .bind(tenant_id)
        .bind(from_profile_id)
        .bind(to_profile_id)
        .bind(note)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("interests_from_to_key") =>
            {
                AppError::conflict("Already shortlisted this profile")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create interest", e),
        })
    }

    /// List interests sent by a profile.
    pub async fn find_sent(
        &self,
        conn: &mut PgConnection,
        from_profile_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Interest>> {
        sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE from_profile_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(from_profile_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sent interests", e))
    }

    /// List interests received by a profile.
    pub async fn find_received(
        &self,
        conn: &mut PgConnection,
        to_profile_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Interest>> {
        sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE to_profile_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(to_profile_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list received interests", e)
        })
    }

    /// Update an interest's status.
    pub async fn update_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: InterestStatus,
    ) -> AppResult<Interest> {
        sqlx::query_as::<_, Interest>(
            "UPDATE interests SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update interest status", e)
        })?
        .ok_or_else(|| AppError::not_found("Interest not found"))
    }

    /// Withdraw (delete) an interest.
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM interests WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete interest", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

impl Default for InterestRepository {
    fn default() -> Self {
        Self::new()
    }
}
