//! Password strength policy for new passwords.
//!
//! Enforced at the boundary, before hashing. A violation reports every
//! missing character class in one message so clients can show the complete
//! list at once.

use varanbook_core::config::auth::AuthConfig;
use varanbook_core::error::AppError;

/// The accepted special characters.
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Validates password strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, collecting every violation.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let mut missing: Vec<String> = Vec::new();

        if password.chars().count() < self.min_length {
            missing.push(format!("at least {} characters", self.min_length));
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            missing.push("one uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            missing.push("one lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            missing.push("one digit".to_string());
        }
        if !password.chars().any(|c| SYMBOLS.contains(c)) {
            missing.push("one special character (!@#$%^&*…)".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Password must contain: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy { min_length: 8 }
    }

    #[test]
    fn accepts_compliant_password() {
        assert!(policy().validate("Test@1234").is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let err = policy().validate("T@1a").unwrap_err();
        assert!(err.message.contains("at least 8 characters"));
    }

    #[test]
    fn enumerates_all_missing_classes() {
        let err = policy().validate("password").unwrap_err();
        assert!(err.message.contains("one uppercase letter"));
        assert!(err.message.contains("one digit"));
        assert!(err.message.contains("one special character"));
        assert!(!err.message.contains("one lowercase letter"));
    }

    #[test]
    fn rejects_missing_symbol() {
        let err = policy().validate("Passw0rd").unwrap_err();
        assert!(err.message.contains("one special character"));
    }
}
