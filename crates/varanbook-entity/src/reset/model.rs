//! Password reset token entity model.
//!
//! Single-use: once `is_used` is set or the expiry has passed, the token
//! can never again authorize a password change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted, hashed password reset token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordResetToken {
    /// Unique token row identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// SHA-256 hex digest of the raw URL-safe token.
    pub token_hash: String,
    /// Set exactly once, on successful reset.
    pub is_used: bool,
    /// Expiry (short; one hour by default).
    pub expires_at: DateTime<Utc>,
    /// When the token was created.
    pub created_at: DateTime<Utc>,
    /// When the token was consumed.
    pub used_at: Option<DateTime<Utc>>,
}

impl PasswordResetToken {
    /// Whether this token may still authorize a password change.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(is_used: bool, expires_in: Duration) -> PasswordResetToken {
        let now = Utc::now();
        PasswordResetToken {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "ab".repeat(32),
            is_used,
            expires_at: now + expires_in,
            created_at: now,
            used_at: None,
        }
    }

    #[test]
    fn used_token_is_never_usable() {
        assert!(!token(true, Duration::hours(1)).is_usable(Utc::now()));
    }

    #[test]
    fn expired_token_is_never_usable() {
        assert!(!token(false, Duration::seconds(-1)).is_usable(Utc::now()));
    }

    #[test]
    fn fresh_token_is_usable() {
        assert!(token(false, Duration::hours(1)).is_usable(Utc::now()));
    }
}
