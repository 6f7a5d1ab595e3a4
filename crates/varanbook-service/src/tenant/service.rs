//! Tenant service: super-admin management of the tenant registry.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use varanbook_core::error::AppError;
use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_entity::tenant::{CreateTenant, Tenant, UpdateTenant};
use varanbook_entity::user::UserRole;

use varanbook_auth::policy::AccessPolicy;

use crate::context::RequestContext;

/// Manages the tenant registry. Every operation requires the platform
/// operator role.
#[derive(Debug, Clone)]
pub struct TenantService {
    tenants: Arc<TenantRepository>,
    policy: Arc<AccessPolicy>,
}

impl TenantService {
    /// Creates a new tenant service.
    pub fn new(tenants: Arc<TenantRepository>, policy: Arc<AccessPolicy>) -> Self {
        Self { tenants, policy }
    }

    /// Onboard a new matrimonial centre.
    pub async fn create(&self, ctx: &RequestContext, data: &CreateTenant) -> Result<Tenant, AppError> {
        self.policy
            .require_min_role(&ctx.actor(), UserRole::SuperAdmin)?;
        validate_slug(&data.slug)?;

        let tenant = self.tenants.create(data).await?;
        info!(tenant_id = %tenant.id, slug = %tenant.slug, "Tenant created");
        Ok(tenant)
    }

    /// List tenants, optionally filtered by activation state.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        is_active: Option<bool>,
        page: &PageRequest,
    ) -> Result<PageResponse<Tenant>, AppError> {
        self.policy
            .require_min_role(&ctx.actor(), UserRole::SuperAdmin)?;
        self.tenants.find_all(is_active, page).await
    }

    /// Fetch a tenant by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Tenant, AppError> {
        self.policy
            .require_min_role(&ctx.actor(), UserRole::SuperAdmin)?;
        self.tenants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found"))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: &UpdateTenant,
    ) -> Result<Tenant, AppError> {
        self.policy
            .require_min_role(&ctx.actor(), UserRole::SuperAdmin)?;
        let tenant = self.tenants.update(id, data).await?;
        info!(tenant_id = %id, "Tenant updated");
        Ok(tenant)
    }

    /// Soft-deactivate a tenant. Resolution and tenant-scoped
    /// authentication stop immediately; no user rows are touched.
    pub async fn deactivate(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.policy
            .require_min_role(&ctx.actor(), UserRole::SuperAdmin)?;
        self.tenants.deactivate(id).await?;
        info!(tenant_id = %id, "Tenant deactivated");
        Ok(())
    }
}

/// Slugs are lowercase alphanumerics and hyphens, starting with a letter.
fn validate_slug(slug: &str) -> Result<(), AppError> {
    let valid = !slug.is_empty()
        && slug.len() <= 100
        && slug.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(AppError::validation(
            "Slug must be lowercase letters, digits, and hyphens, starting with a letter",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_slugs() {
        assert!(validate_slug("sharma").is_ok());
        assert!(validate_slug("sharma-matrimony-2").is_ok());
    }

    #[test]
    fn rejects_invalid_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Sharma").is_err());
        assert!(validate_slug("1sharma").is_err());
        assert!(validate_slug("sharma matrimony").is_err());
        assert!(validate_slug("sharma_matrimony").is_err());
    }
}
