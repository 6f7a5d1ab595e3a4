//! Per-request tenant resolution.
//!
//! Resolution strategy, in strict priority order:
//!   1. Explicit tenant ID header (UUID string). An invalid value yields
//!      no tenant rather than an error, leaving the decision to downstream
//!      authorization.
//!   2. Host subdomain: the leading label names the tenant slug, only when
//!      the hostname has at least three dot-separated labels, so a bare
//!      domain never false-positives as a tenant.
//!
//! Only active tenants are resolvable. Resolution never fails a request;
//! absence of a tenant is a downstream authorization concern.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_entity::tenant::TenantContext;

/// Path prefixes that are intrinsically tenant-free: the health probe,
/// the auth endpoints (tenant derived later from the decoded token), and
/// the super-admin tenant registry.
const TENANT_FREE_PREFIXES: &[&str] = &["/health", "/auth", "/admin/tenants"];

/// A parsed tenant reference, before the registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantHint {
    /// Explicit tenant ID from the header.
    Id(Uuid),
    /// Slug derived from the host's leading label.
    Slug(String),
}

/// Resolves the active tenant for inbound requests.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    tenants: Arc<TenantRepository>,
}

impl TenantResolver {
    /// Creates a new resolver.
    pub fn new(tenants: Arc<TenantRepository>) -> Self {
        Self { tenants }
    }

    /// Whether the path is exempt from tenant resolution.
    pub fn is_tenant_free(path: &str) -> bool {
        TENANT_FREE_PREFIXES.iter().any(|p| path.starts_with(p))
    }

    /// Parse the tenant reference from the header value and host, without
    /// touching the registry. Header takes priority; a present-but-invalid
    /// header yields no hint at all.
    pub fn parse_hint(header: Option<&str>, host: Option<&str>) -> Option<TenantHint> {
        if let Some(raw) = header {
            return Uuid::parse_str(raw.trim()).ok().map(TenantHint::Id);
        }

        let host = host?;
        let host = host.split(':').next().unwrap_or(host);
        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() >= 3 && !labels[0].is_empty() {
            return Some(TenantHint::Slug(labels[0].to_string()));
        }

        None
    }

    /// Resolve the tenant for a request. Never raises: registry errors are
    /// logged and treated as no-tenant, which downstream authorization
    /// rejects on its own terms.
    pub async fn resolve(&self, header: Option<&str>, host: Option<&str>) -> Option<TenantContext> {
        let hint = Self::parse_hint(header, host)?;

        let lookup = match &hint {
            TenantHint::Id(id) => self.tenants.find_active_by_id(*id).await,
            TenantHint::Slug(slug) => self.tenants.find_active_by_slug(slug).await,
        };

        match lookup {
            Ok(Some(tenant)) => {
                debug!(slug = %tenant.slug, "Tenant resolved");
                Some(TenantContext::from(&tenant))
            }
            Ok(None) => {
                debug!(?hint, "No active tenant for hint");
                None
            }
            Err(e) => {
                warn!(error = %e, "Tenant lookup failed; treating as no tenant");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_takes_priority_over_host() {
        let id = Uuid::new_v4();
        let hint = TenantResolver::parse_hint(
            Some(&id.to_string()),
            Some("sharma.varanbook.in"),
        );
        assert_eq!(hint, Some(TenantHint::Id(id)));
    }

    #[test]
    fn invalid_header_yields_no_hint() {
        // Invalid format resolves to no tenant, even with a usable host.
        let hint = TenantResolver::parse_hint(Some("not-a-uuid"), Some("sharma.varanbook.in"));
        assert_eq!(hint, None);
    }

    #[test]
    fn subdomain_resolves_to_slug() {
        let hint = TenantResolver::parse_hint(None, Some("sharma.varanbook.in"));
        assert_eq!(hint, Some(TenantHint::Slug("sharma".to_string())));
    }

    #[test]
    fn bare_domain_is_not_a_tenant() {
        assert_eq!(TenantResolver::parse_hint(None, Some("varanbook.in")), None);
        assert_eq!(TenantResolver::parse_hint(None, Some("localhost")), None);
    }

    #[test]
    fn host_port_is_ignored() {
        let hint = TenantResolver::parse_hint(None, Some("sharma.varanbook.in:8080"));
        assert_eq!(hint, Some(TenantHint::Slug("sharma".to_string())));
    }

    #[test]
    fn tenant_free_paths() {
        assert!(TenantResolver::is_tenant_free("/health"));
        assert!(TenantResolver::is_tenant_free("/auth/login"));
        assert!(TenantResolver::is_tenant_free("/admin/tenants"));
        assert!(!TenantResolver::is_tenant_free("/profiles"));
    }
}
