//! Profile service.
//!
//! Every operation opens a tenant-bound transaction so the row security
//! policy independently re-checks tenant scoping underneath the access
//! policy evaluator. A cross-tenant profile ID is therefore invisible at
//! the storage layer and reads as plain not-found.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use varanbook_core::error::AppError;
use varanbook_core::traits::object_store::UploadPurpose;
use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_database::isolation::begin_tenant_tx;
use varanbook_database::repositories::profile::ProfileRepository;
use varanbook_entity::profile::model::Gender;
use varanbook_entity::profile::{CreateProfile, Profile, ProfileStatus, UpdateProfile};
use varanbook_entity::user::UserRole;

use varanbook_auth::policy::{AccessPolicy, Action, ResourceRef};

use crate::context::RequestContext;

/// Manages matrimonial profiles.
#[derive(Debug, Clone)]
pub struct ProfileService {
    pool: PgPool,
    profiles: Arc<ProfileRepository>,
    policy: Arc<AccessPolicy>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(pool: PgPool, profiles: Arc<ProfileRepository>, policy: Arc<AccessPolicy>) -> Self {
        Self {
            pool,
            profiles,
            policy,
        }
    }

    /// Create the caller's profile. One per user; self-service profiles
    /// are published immediately.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: &CreateProfile,
    ) -> Result<Profile, AppError> {
        let tenant_id = ctx
            .tenant_id
            .ok_or_else(|| AppError::validation("Tenant context is required"))?;

        let mut tx = begin_tenant_tx(&self.pool, Some(tenant_id)).await?;

        let profile = self
            .profiles
            .create(&mut *tx, ctx.user_id, tenant_id, ProfileStatus::Active, data)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit profile: {e}")))?;

        info!(profile_id = %profile.id, user_id = %ctx.user_id, "Profile created");
        Ok(profile)
    }

    /// The caller's own profile.
    pub async fn get_mine(&self, ctx: &RequestContext) -> Result<Profile, AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let profile = self
            .profiles
            .find_by_user(&mut *tx, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;
        Ok(profile)
    }

    /// Fetch a profile by ID under the access policy.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Profile, AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let profile = self
            .profiles
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        self.policy
            .authorize(&ctx.actor(), Action::Read, &ResourceRef::profile(&profile))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;
        Ok(profile)
    }

    /// Update a profile under the access policy.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: &UpdateProfile,
    ) -> Result<Profile, AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let profile = self
            .profiles
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        self.policy
            .authorize(&ctx.actor(), Action::Write, &ResourceRef::profile(&profile))?;

        // Members cannot moderate their own visibility; only admins may
        // change status.
        if data.status.is_some() && !ctx.role.is_admin_or_above() {
            return Err(AppError::access_denied(
                "Only an administrator can change profile status",
            ));
        }

        let updated = self.profiles.update(&mut *tx, id, data).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit update: {e}")))?;

        info!(profile_id = %id, by = %ctx.user_id, "Profile updated");
        Ok(updated)
    }

    /// Record an uploaded object key against a profile: photos append,
    /// the horoscope document replaces.
    pub async fn attach_upload(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        purpose: UploadPurpose,
        key: &str,
    ) -> Result<(), AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let profile = self
            .profiles
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        self.policy
            .authorize(&ctx.actor(), Action::Write, &ResourceRef::profile(&profile))?;

        match purpose {
            UploadPurpose::Photo => self.profiles.append_photo_key(&mut *tx, id, key).await?,
            UploadPurpose::Horoscope => self.profiles.set_horoscope_key(&mut *tx, id, key).await?,
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit attachment: {e}")))?;
        Ok(())
    }

    /// Delete a profile. Admin or above.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.policy.require_min_role(&ctx.actor(), UserRole::Admin)?;

        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let profile = self
            .profiles
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        self.policy
            .authorize(&ctx.actor(), Action::Write, &ResourceRef::profile(&profile))?;

        self.profiles.delete(&mut *tx, id).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit delete: {e}")))?;

        info!(profile_id = %id, by = %ctx.user_id, "Profile deleted");
        Ok(())
    }

    /// List profiles in a tenant. Admin or above; super admins supply the
    /// tenant through the resolved tenant context.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        resolved_tenant: Option<Uuid>,
        gender: Option<Gender>,
        status: Option<ProfileStatus>,
        page: &PageRequest,
    ) -> Result<PageResponse<Profile>, AppError> {
        self.policy.require_min_role(&ctx.actor(), UserRole::Admin)?;

        let tenant_id = ctx
            .tenant_id
            .or(resolved_tenant)
            .ok_or_else(|| AppError::validation("Tenant context is required"))?;

        let mut tx = begin_tenant_tx(&self.pool, Some(tenant_id)).await?;
        let result = self
            .profiles
            .find_by_tenant(&mut *tx, tenant_id, gender, status, page)
            .await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;

        Ok(result)
    }
}
