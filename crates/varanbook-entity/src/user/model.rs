//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user account.
///
/// Invariant: `role == SuperAdmin` ⇔ `tenant_id` is `None`. Admins and
/// members always reference an active tenant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Owning tenant; `None` only for super admins.
    pub tenant_id: Option<Uuid>,
    /// Login email, case-insensitively unique.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Full legal name.
    pub full_name: String,
    /// Phone number (E.164).
    pub phone: Option<String>,
    /// Role in the three-level hierarchy.
    pub role: UserRole,
    /// Deactivated accounts cannot authenticate.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// When the email was verified.
    pub email_verified_at: Option<DateTime<Utc>>,
    /// Device token for push notification delivery.
    pub push_token: Option<String>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account may authenticate right now.
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Owning tenant; `None` only for super admins.
    pub tenant_id: Option<Uuid>,
    /// Login email (already lowercased).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Full name.
    pub full_name: String,
    /// Phone (optional).
    pub phone: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for a partial self-service update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New full name.
    pub full_name: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New push token.
    pub push_token: Option<String>,
}
