//! Profile visibility status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility state of a matrimonial profile.
///
/// Only `Active` profiles are visible to other members of the same tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "profile_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    /// Not yet published.
    Draft,
    /// Published and visible within the tenant.
    Active,
    /// Hidden by an admin.
    Suspended,
    /// Match concluded; no longer browsable.
    Matched,
}

impl ProfileStatus {
    /// Whether other members of the same tenant may view the profile.
    pub fn is_browsable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Matched => "matched",
        };
        write!(f, "{s}")
    }
}
