//! Interest service: express, respond to, and withdraw interests.
//!
//! All operations run inside tenant-bound transactions. Sender/recipient
//! rules are enforced here on top of the generic tenant scoping.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use varanbook_core::error::AppError;
use varanbook_database::isolation::begin_tenant_tx;
use varanbook_database::repositories::interest::InterestRepository;
use varanbook_database::repositories::profile::ProfileRepository;
use varanbook_entity::interest::{CreateInterest, Interest, InterestStatus};
use varanbook_entity::profile::Profile;

use crate::context::RequestContext;
use crate::notify::NotificationService;

/// Manages interest records between profiles.
#[derive(Clone)]
pub struct InterestService {
    pool: PgPool,
    interests: Arc<InterestRepository>,
    profiles: Arc<ProfileRepository>,
    notifications: Arc<NotificationService>,
}

impl std::fmt::Debug for InterestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterestService").finish()
    }
}

impl InterestService {
    /// Creates a new interest service.
    pub fn new(
        pool: PgPool,
        interests: Arc<InterestRepository>,
        profiles: Arc<ProfileRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            pool,
            interests,
            profiles,
            notifications,
        }
    }

    /// Express interest in another profile.
    pub async fn express(
        &self,
        ctx: &RequestContext,
        data: &CreateInterest,
    ) -> Result<Interest, AppError> {
        let tenant_id = ctx
            .tenant_id
            .ok_or_else(|| AppError::validation("Tenant context is required"))?;

        let mut tx = begin_tenant_tx(&self.pool, Some(tenant_id)).await?;

        let caller = self.caller_profile(&mut tx, ctx).await?;

        if caller.id == data.to_profile_id {
            return Err(AppError::validation("Cannot shortlist yourself"));
        }

        // Row security already hides foreign rows; the explicit check keeps
        // the invariant even when the policy is not installed (tests, sqlite
        // fixtures).
        let target = self
            .profiles
            .find_by_id(&mut *tx, data.to_profile_id)
            .await?
            .filter(|p| p.tenant_id == tenant_id)
            .ok_or_else(|| AppError::not_found("Target profile not found"))?;

        let interest = self
            .interests
            .create(
                &mut *tx,
                tenant_id,
                caller.id,
                target.id,
                data.note.as_deref(),
            )
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit interest: {e}")))?;

        info!(interest_id = %interest.id, from = %caller.id, to = %target.id, "Interest expressed");

        self.notifications
            .push_interest_received(tenant_id, target.user_id, interest.id)
            .await;

        Ok(interest)
    }

    /// Interests sent by the caller's profile.
    pub async fn sent(
        &self,
        ctx: &RequestContext,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Interest>, AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let caller = self.caller_profile(&mut tx, ctx).await?;
        let items = self
            .interests
            .find_sent(&mut *tx, caller.id, limit, offset)
            .await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;
        Ok(items)
    }

    /// Interests received by the caller's profile.
    pub async fn received(
        &self,
        ctx: &RequestContext,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Interest>, AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;
        let caller = self.caller_profile(&mut tx, ctx).await?;
        let items = self
            .interests
            .find_received(&mut *tx, caller.id, limit, offset)
            .await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;
        Ok(items)
    }

    /// Accept or reject a received interest. Recipient only; an interest
    /// can be answered exactly once.
    pub async fn respond(
        &self,
        ctx: &RequestContext,
        interest_id: Uuid,
        status: InterestStatus,
    ) -> Result<Interest, AppError> {
        if status == InterestStatus::Shortlisted {
            return Err(AppError::validation(
                "Response must be 'accepted' or 'rejected'",
            ));
        }

        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;

        let entry = self
            .interests
            .find_by_id(&mut *tx, interest_id)
            .await?
            .ok_or_else(|| AppError::not_found("Interest not found"))?;

        let caller = self.caller_profile(&mut tx, ctx).await?;

        if entry.to_profile_id != caller.id {
            return Err(AppError::access_denied(
                "Only the recipient can respond to an interest",
            ));
        }
        if entry.status != InterestStatus::Shortlisted {
            return Err(AppError::conflict("Already responded to this interest"));
        }

        let updated = self
            .interests
            .update_status(&mut *tx, interest_id, status)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit response: {e}")))?;

        info!(interest_id = %interest_id, status = %status, "Interest answered");

        // Notify the sender's user.
        let sender_user = self.profile_owner(&updated.from_profile_id, ctx).await;
        if let Some(user_id) = sender_user {
            self.notifications
                .push_interest_answered(
                    updated.tenant_id,
                    user_id,
                    updated.id,
                    status == InterestStatus::Accepted,
                )
                .await;
        }

        Ok(updated)
    }

    /// Withdraw an interest. Sender only.
    pub async fn withdraw(&self, ctx: &RequestContext, interest_id: Uuid) -> Result<(), AppError> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await?;

        let entry = self
            .interests
            .find_by_id(&mut *tx, interest_id)
            .await?
            .ok_or_else(|| AppError::not_found("Interest not found"))?;

        let caller = self.caller_profile(&mut tx, ctx).await?;

        if entry.from_profile_id != caller.id {
            return Err(AppError::access_denied("Only the sender can withdraw"));
        }

        self.interests.delete(&mut *tx, interest_id).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit withdrawal: {e}")))?;

        info!(interest_id = %interest_id, by = %ctx.user_id, "Interest withdrawn");
        Ok(())
    }

    /// The caller's own profile, required for every interest operation.
    async fn caller_profile(
        &self,
        tx: &mut sqlx::Transaction<'static, sqlx::Postgres>,
        ctx: &RequestContext,
    ) -> Result<Profile, AppError> {
        self.profiles
            .find_by_user(&mut **tx, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Create your profile first"))
    }

    /// Resolve a profile's owning user for notification targeting.
    /// Best-effort: failures yield no notification, never an error.
    async fn profile_owner(&self, profile_id: &Uuid, ctx: &RequestContext) -> Option<Uuid> {
        let mut tx = begin_tenant_tx(&self.pool, ctx.tenant_id).await.ok()?;
        let profile = self.profiles.find_by_id(&mut *tx, *profile_id).await.ok()??;
        let _ = tx.commit().await;
        Some(profile.user_id)
    }
}
