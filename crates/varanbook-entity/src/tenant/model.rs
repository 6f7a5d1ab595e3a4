//! Tenant entity model.
//!
//! A tenant is one matrimonial centre: the unit of data partitioning.
//! The tenants table itself is not row-security protected; it is only
//! writable through the super-admin endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Subscription plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "plan_tier", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Entry plan.
    Starter,
    /// Mid-size centres.
    Growth,
    /// Large centres with custom domains.
    Enterprise,
}

/// A registered matrimonial centre.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Globally unique tenant identifier.
    pub id: Uuid,
    /// Human-readable centre name.
    pub name: String,
    /// URL-safe identifier used in subdomain / header resolution.
    pub slug: String,
    /// Custom domain if white-labelled.
    pub domain: Option<String>,
    /// Primary contact email.
    pub contact_email: String,
    /// Primary contact phone (E.164).
    pub contact_phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Subscription plan.
    pub plan: PlanTier,
    /// Maximum member accounts allowed by the plan.
    pub max_users: i32,
    /// Maximum admin accounts allowed by the plan.
    pub max_admins: i32,
    /// Tenants are never hard-deleted; deactivation blocks resolution
    /// and tenant-scoped authentication immediately.
    pub is_active: bool,
    /// Trial expiry, if on trial.
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
    /// When the tenant was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The resolved tenant attached to a request's lifetime.
///
/// Carried explicitly through the call chain; also bound to the request's
/// database transaction as the row-security session variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantContext {
    /// Tenant ID.
    pub id: Uuid,
    /// Tenant slug.
    pub slug: String,
}

impl From<&Tenant> for TenantContext {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id,
            slug: tenant.slug.clone(),
        }
    }
}

/// Data required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Centre name.
    pub name: String,
    /// Unique URL-safe slug.
    pub slug: String,
    /// Custom domain (optional).
    pub domain: Option<String>,
    /// Contact email.
    pub contact_email: String,
    /// Contact phone (optional).
    pub contact_phone: Option<String>,
    /// Postal address (optional).
    pub address: Option<String>,
    /// Subscription plan.
    pub plan: PlanTier,
    /// Member quota.
    pub max_users: i32,
    /// Admin quota.
    pub max_admins: i32,
}

/// Data for a partial tenant update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTenant {
    /// New centre name.
    pub name: Option<String>,
    /// New custom domain.
    pub domain: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New postal address.
    pub address: Option<String>,
    /// New plan.
    pub plan: Option<PlanTier>,
    /// New member quota.
    pub max_users: Option<i32>,
    /// New admin quota.
    pub max_admins: Option<i32>,
    /// Activation flag.
    pub is_active: Option<bool>,
}
