//! Session lifecycle manager — login, refresh rotation, and revocation.
//!
//! Two sources of truth cooperate here: the JWT signature is authoritative
//! for tamper detection, the ledger row is authoritative for revocation.
//! Both must pass for a refresh token to rotate.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};

use varanbook_core::error::AppError;
use varanbook_database::repositories::session::RefreshSessionRepository;
use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_database::repositories::user::UserRepository;
use varanbook_entity::user::User;

use crate::hash::sha256_hex;
use crate::password::PasswordHasher;
use crate::token::{TokenIssuer, TokenPair, TokenVerifier};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Manages the refresh session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// Pool for the rotation read-modify-write transaction.
    pool: PgPool,
    /// JWT issuer.
    issuer: Arc<TokenIssuer>,
    /// JWT verifier.
    verifier: Arc<TokenVerifier>,
    /// Session ledger persistence.
    sessions: Arc<RefreshSessionRepository>,
    /// User lookups.
    users: Arc<UserRepository>,
    /// Tenant lookups, for deactivation checks.
    tenants: Arc<TenantRepository>,
    /// Password hashing.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        pool: PgPool,
        issuer: Arc<TokenIssuer>,
        verifier: Arc<TokenVerifier>,
        sessions: Arc<RefreshSessionRepository>,
        users: Arc<UserRepository>,
        tenants: Arc<TenantRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            pool,
            issuer,
            verifier,
            sessions,
            users,
            tenants,
            hasher,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the user by email and verify the password. Both failures
    ///    collapse into the same generic error.
    /// 2. Reject deactivated accounts and deactivated tenants.
    /// 3. Mint an access + refresh pair and persist the refresh hash.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        device_info: Option<&str>,
    ) -> Result<LoginResult, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        self.check_account(&user).await?;

        let tokens = self
            .issuer
            .issue_pair(user.id, user.tenant_id, user.role)?;

        self.sessions
            .create(
                user.id,
                &sha256_hex(&tokens.refresh_token),
                device_info,
                tokens.refresh_expires_at,
            )
            .await?;

        let _ = self.users.update_last_login(user.id, Utc::now()).await;

        info!(user_id = %user.id, role = %user.role, "Login successful");

        Ok(LoginResult { tokens, user })
    }

    /// Rotates a refresh token: one hop of the single rotation chain.
    ///
    /// The presented token is verified cryptographically, then looked up by
    /// hash under a row lock. On success the old row is revoked and the
    /// successor row inherits the **same absolute expiry horizon** — the
    /// window is never extended by rotation. A used token can never be
    /// replayed: of two concurrent rotations, one observes the row already
    /// revoked and fails.
    pub async fn rotate(
        &self,
        raw_refresh_token: &str,
        device_info: Option<&str>,
    ) -> Result<TokenPair, AppError> {
        let claims = self.verifier.decode_refresh(raw_refresh_token)?;

        let token_hash = sha256_hex(raw_refresh_token);
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let stored = self
            .sessions
            .find_active_by_hash_for_update(&mut *tx, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::session_not_found("Refresh token not recognised or revoked")
            })?;

        // The ledger row is authoritative even when the signed token itself
        // is still within its own window.
        if stored.is_expired(now) {
            return Err(AppError::session_expired("Refresh session has expired"));
        }

        let user = self
            .users
            .find_by_id_in(&mut *tx, claims.user_id())
            .await?
            .ok_or_else(|| AppError::session_not_found("User no longer exists"))?;

        self.check_account(&user).await?;

        let tokens = self
            .issuer
            .issue_pair(user.id, user.tenant_id, user.role)?;

        self.sessions.revoke_by_id(&mut *tx, stored.id, now).await?;
        self.sessions
            .create_in(
                &mut *tx,
                user.id,
                &sha256_hex(&tokens.refresh_token),
                device_info,
                stored.expires_at,
            )
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit rotation: {e}")))?;

        info!(user_id = %user.id, "Refresh token rotated");

        Ok(tokens)
    }

    /// Revokes a refresh token. Idempotent: revoking an already-revoked or
    /// unknown token is a silent no-op, so logout never errors on a stale
    /// token.
    pub async fn revoke(&self, raw_refresh_token: &str) -> Result<(), AppError> {
        self.sessions
            .revoke_by_hash(&sha256_hex(raw_refresh_token))
            .await
    }

    /// Rejects deactivated accounts and accounts whose tenant has been
    /// deactivated. Tenant deactivation blocks all tenant-scoped
    /// authentication immediately, without touching user rows.
    async fn check_account(&self, user: &User) -> Result<(), AppError> {
        if !user.can_login() {
            return Err(AppError::account_deactivated(
                "Account is deactivated. Contact your centre administrator.",
            ));
        }

        if let Some(tenant_id) = user.tenant_id {
            let tenant = self.tenants.find_active_by_id(tenant_id).await?;
            if tenant.is_none() {
                warn!(user_id = %user.id, tenant_id = %tenant_id, "Login blocked: tenant deactivated");
                return Err(AppError::account_deactivated(
                    "This matrimonial centre is no longer active.",
                ));
            }
        }

        Ok(())
    }
}
