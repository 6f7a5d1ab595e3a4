//! `ResolvedTenant` extractor — the tenant context attached by the
//! resolution middleware, if any.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use varanbook_entity::tenant::TenantContext;

/// The tenant resolved for this request. `None` is not an error; endpoints
/// that require a tenant decide for themselves.
#[derive(Debug, Clone)]
pub struct ResolvedTenant(pub Option<TenantContext>);

impl<S> FromRequestParts<S> for ResolvedTenant
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ResolvedTenant(
            parts.extensions.get::<Option<TenantContext>>().cloned().flatten(),
        ))
    }
}
