//! JWT validation.
//!
//! The verifier is a pure, stateless cryptographic check: no database
//! lookup, no shared mutable state, safe to call concurrently. Database-
//! backed revocation is layered on top only for refresh tokens, in the
//! session manager.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use varanbook_core::config::auth::AuthConfig;
use varanbook_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// Validates JWT signatures, expiry, and token kind.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::wrong_token_kind(
                "Expected an access token, received a refresh token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;

        if claims.kind != TokenKind::Refresh {
            return Err(AppError::wrong_token_kind(
                "Expected a refresh token, received an access token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without kind checking.
    fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::expired_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::issuer::TokenIssuer;
    use uuid::Uuid;
    use varanbook_core::config::auth::AuthConfig;
    use varanbook_core::error::ErrorKind;
    use varanbook_entity::user::UserRole;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            access_ttl_minutes: 60,
            refresh_ttl_days: 7,
            reset_token_ttl_hours: 1,
            password_min_length: 8,
        }
    }

    #[test]
    fn access_token_round_trips_identity() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());
        let user_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();

        let pair = issuer
            .issue_pair(user_id, Some(tenant_id), UserRole::Member)
            .unwrap();
        let claims = verifier.decode_access(&pair.access_token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.tenant_id(), Some(tenant_id));
        assert_eq!(claims.rol, UserRole::Member);
    }

    #[test]
    fn super_admin_tokens_carry_no_tenant() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let pair = issuer
            .issue_pair(Uuid::new_v4(), None, UserRole::SuperAdmin)
            .unwrap();
        let claims = verifier.decode_access(&pair.access_token).unwrap();

        assert_eq!(claims.tenant_id(), None);
        assert_eq!(claims.rol, UserRole::SuperAdmin);
    }

    #[test]
    fn refresh_token_rejected_where_access_expected() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let pair = issuer
            .issue_pair(Uuid::new_v4(), None, UserRole::SuperAdmin)
            .unwrap();
        let err = verifier.decode_access(&pair.refresh_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongTokenKind);

        let err = verifier.decode_refresh(&pair.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongTokenKind);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let pair = issuer
            .issue_pair(Uuid::new_v4(), None, UserRole::SuperAdmin)
            .unwrap();

        let mut tampered = pair.access_token.clone();
        tampered.pop();
        tampered.push('A');
        let err = verifier.decode_access(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn foreign_signature_is_invalid() {
        let issuer = TokenIssuer::new(&AuthConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..config()
        });
        let verifier = TokenVerifier::new(&config());

        let pair = issuer
            .issue_pair(Uuid::new_v4(), None, UserRole::SuperAdmin)
            .unwrap();
        let err = verifier.decode_access(&pair.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn garbage_is_invalid() {
        let verifier = TokenVerifier::new(&config());
        let err = verifier.decode_access("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }
}
