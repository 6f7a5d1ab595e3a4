//! Interest (shortlist) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::InterestStatus;

/// An interest expressed by one profile in another, within one tenant.
///
/// Unique per (from, to) pair. Only the recipient may accept or reject;
/// only the sender may withdraw.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interest {
    /// Unique interest identifier.
    pub id: Uuid,
    /// Owning tenant. Row security filters on this column.
    pub tenant_id: Uuid,
    /// Profile expressing the interest.
    pub from_profile_id: Uuid,
    /// Profile receiving the interest.
    pub to_profile_id: Uuid,
    /// Optional note shown to the recipient.
    pub note: Option<String>,
    /// Current lifecycle state.
    pub status: InterestStatus,
    /// When the interest was expressed.
    pub created_at: DateTime<Utc>,
    /// When the interest was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to express an interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterest {
    /// Target profile.
    pub to_profile_id: Uuid,
    /// Optional note.
    pub note: Option<String>,
}
