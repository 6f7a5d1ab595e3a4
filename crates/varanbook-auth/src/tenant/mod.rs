//! Tenant resolution.

pub mod resolver;

pub use resolver::{TenantHint, TenantResolver};
