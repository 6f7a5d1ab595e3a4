//! Tenant entity.

pub mod model;

pub use model::{CreateTenant, PlanTier, Tenant, TenantContext, UpdateTenant};
