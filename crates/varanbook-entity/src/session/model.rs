//! Refresh session entity model.
//!
//! One row per issued refresh token, keyed by a one-way hash of the raw
//! token string. The raw value is returned to the caller exactly once at
//! issue time and is never retrievable again. Rows are never deleted by
//! the application; revocation is a soft flag so the table doubles as an
//! audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted, hashed refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshSession {
    /// Unique session row identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// SHA-256 hex digest of the raw refresh token.
    pub token_hash: String,
    /// Optional device context (truncated User-Agent).
    pub device_info: Option<String>,
    /// Set on rotation, explicit logout, or admin termination.
    pub is_revoked: bool,
    /// Absolute expiry horizon. Rotation successors inherit this value;
    /// the horizon is never extended.
    pub expires_at: DateTime<Utc>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the token was last presented for rotation.
    pub last_used_at: Option<DateTime<Utc>>,
}

impl RefreshSession {
    /// Whether the stored expiry has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
