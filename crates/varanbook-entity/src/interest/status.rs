//! Interest status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an expressed interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interest_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    /// Sent, awaiting response from the recipient.
    Shortlisted,
    /// Accepted by the recipient.
    Accepted,
    /// Rejected by the recipient.
    Rejected,
}

impl fmt::Display for InterestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Shortlisted => "shortlisted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}
