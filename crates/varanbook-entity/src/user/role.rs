//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Roles are ordered by privilege level: SuperAdmin > Admin > Member.
/// A super admin is the platform operator and carries no tenant; admins
/// and members are always scoped to exactly one tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Platform operator with unrestricted cross-tenant access.
    SuperAdmin,
    /// Matrimonial centre administrator, scoped to one tenant.
    Admin,
    /// Registered candidate, scoped to one tenant; owns at most one profile.
    Member,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::SuperAdmin => 3,
            Self::Admin => 2,
            Self::Member => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is the platform operator.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Check if this role is an admin or higher.
    pub fn is_admin_or_above(&self) -> bool {
        self.has_at_least(&Self::Admin)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = varanbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(varanbook_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: super_admin, admin, member"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::SuperAdmin.has_at_least(&UserRole::Member));
        assert!(UserRole::SuperAdmin.has_at_least(&UserRole::SuperAdmin));
        assert!(UserRole::Admin.has_at_least(&UserRole::Member));
        assert!(!UserRole::Member.has_at_least(&UserRole::Admin));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("super_admin".parse::<UserRole>().unwrap(), UserRole::SuperAdmin);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("moderator".parse::<UserRole>().is_err());
    }
}
