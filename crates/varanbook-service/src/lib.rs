//! # varanbook-service
//!
//! Business logic for Varanbook: account onboarding and password flows,
//! matrimonial profiles, interests, the tenant registry, and best-effort
//! notification dispatch.

pub mod account;
pub mod context;
pub mod interest;
pub mod notify;
pub mod profile;
pub mod tenant;

pub use context::RequestContext;
