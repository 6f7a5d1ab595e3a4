//! Account service: registration, admin onboarding, and password flows.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::RngExt;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use tracing::info;

use varanbook_core::config::auth::AuthConfig;
use varanbook_core::error::AppError;
use varanbook_database::repositories::reset::PasswordResetRepository;
use varanbook_database::repositories::session::RefreshSessionRepository;
use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_database::repositories::user::UserRepository;
use varanbook_entity::tenant::TenantContext;
use varanbook_entity::user::{CreateUser, UpdateUser, User, UserRole};

use varanbook_auth::hash::sha256_hex;
use varanbook_auth::password::{PasswordHasher, PasswordPolicy};

use crate::context::RequestContext;
use crate::notify::NotificationService;

/// Length of the raw reset token sent to the user.
const RESET_TOKEN_LEN: usize = 48;

/// Manages user accounts and credential changes.
#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
    users: Arc<UserRepository>,
    tenants: Arc<TenantRepository>,
    resets: Arc<PasswordResetRepository>,
    sessions: Arc<RefreshSessionRepository>,
    hasher: Arc<PasswordHasher>,
    password_policy: Arc<PasswordPolicy>,
    notifications: Arc<NotificationService>,
    auth_config: AuthConfig,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish()
    }
}

impl AccountService {
    /// Creates a new account service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        users: Arc<UserRepository>,
        tenants: Arc<TenantRepository>,
        resets: Arc<PasswordResetRepository>,
        sessions: Arc<RefreshSessionRepository>,
        hasher: Arc<PasswordHasher>,
        password_policy: Arc<PasswordPolicy>,
        notifications: Arc<NotificationService>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            pool,
            users,
            tenants,
            resets,
            sessions,
            hasher,
            password_policy,
            notifications,
            auth_config,
        }
    }

    /// Member self-registration within the resolved tenant.
    pub async fn register_member(
        &self,
        tenant: &TenantContext,
        email: &str,
        password: &str,
        full_name: &str,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        self.password_policy.validate(password)?;

        let registry = self
            .tenants
            .find_active_by_id(tenant.id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found or inactive"))?;

        let members = self
            .users
            .count_by_tenant_and_role(tenant.id, UserRole::Member)
            .await?;
        if members >= registry.max_users as i64 {
            return Err(AppError::conflict(
                "This centre has reached its member limit",
            ));
        }

        let user = self
            .users
            .create(&CreateUser {
                tenant_id: Some(tenant.id),
                email: email.to_string(),
                password_hash: self.hasher.hash_password(password)?,
                full_name: full_name.to_string(),
                phone,
                role: UserRole::Member,
            })
            .await?;

        info!(user_id = %user.id, tenant = %tenant.slug, "Member registered");

        self.notifications.send_welcome(&user.email, &user.full_name).await;

        Ok(user)
    }

    /// Admin onboarding: super admins may target any active tenant, tenant
    /// admins only their own.
    pub async fn onboard_admin(
        &self,
        ctx: &RequestContext,
        tenant_id: uuid::Uuid,
        email: &str,
        password: &str,
        full_name: &str,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        if !ctx.role.is_admin_or_above() {
            return Err(AppError::access_denied("Requires admin role or above"));
        }
        if !ctx.is_super_admin() && ctx.tenant_id != Some(tenant_id) {
            return Err(AppError::access_denied(
                "Cannot create admins for other tenants",
            ));
        }

        self.password_policy.validate(password)?;

        let tenant = self
            .tenants
            .find_active_by_id(tenant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found or inactive"))?;

        let admins = self
            .users
            .count_by_tenant_and_role(tenant_id, UserRole::Admin)
            .await?;
        if admins >= tenant.max_admins as i64 {
            return Err(AppError::conflict(
                "This centre has reached its admin limit",
            ));
        }

        let user = self
            .users
            .create(&CreateUser {
                tenant_id: Some(tenant_id),
                email: email.to_string(),
                password_hash: self.hasher.hash_password(password)?,
                full_name: full_name.to_string(),
                phone,
                role: UserRole::Admin,
            })
            .await?;

        info!(user_id = %user.id, admin_by = %ctx.user_id, "Admin onboarded");

        Ok(user)
    }

    /// Current user's account record.
    pub async fn get_me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Partial self-service update.
    pub async fn update_me(&self, ctx: &RequestContext, data: &UpdateUser) -> Result<User, AppError> {
        self.users.update(ctx.user_id, data).await
    }

    /// Authenticated password change.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_me(ctx).await?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::validation("Current password is incorrect"));
        }

        self.password_policy.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(user.id, &new_hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Issue a single-use reset token and email the link.
    ///
    /// Completes without error whether or not the email exists, so the
    /// endpoint's response cannot be used to enumerate accounts.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(());
        };

        let raw_token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RESET_TOKEN_LEN)
            .map(char::from)
            .collect();

        let expires_at =
            Utc::now() + Duration::hours(self.auth_config.reset_token_ttl_hours as i64);

        self.resets
            .create(user.id, &sha256_hex(&raw_token), expires_at)
            .await?;

        info!(user_id = %user.id, "Password reset token issued");

        self.notifications
            .send_password_reset(&user.email, &raw_token)
            .await;

        Ok(())
    }

    /// Consume a reset token and set the new password.
    ///
    /// The token row is locked for the duration of the transaction, so a
    /// token can be consumed at most once even under concurrent attempts.
    /// A used or expired token never alters the password hash.
    pub async fn reset_password(&self, raw_token: &str, new_password: &str) -> Result<(), AppError> {
        self.password_policy.validate(new_password)?;

        let now = Utc::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let record = self
            .resets
            .find_unused_by_hash_for_update(&mut *tx, &sha256_hex(raw_token))
            .await?
            .filter(|record| record.is_usable(now))
            .ok_or_else(|| AppError::validation("Invalid or expired reset token"))?;

        let user = self
            .users
            .find_by_id_in(&mut *tx, record.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users
            .update_password_in(&mut *tx, user.id, &new_hash)
            .await?;
        self.resets.mark_used(&mut *tx, record.id, now).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit reset: {e}")))?;

        // A reset invalidates every outstanding refresh session.
        let revoked = self.sessions.revoke_all_for_user(user.id).await?;

        info!(user_id = %user.id, revoked_sessions = revoked, "Password reset completed");
        Ok(())
    }
}
