//! Tenant resolution middleware.
//!
//! Attaches `Option<TenantContext>` to every request's extensions. Missing
//! or unresolvable tenants never short-circuit the request here; endpoints
//! that need a tenant reject on their own terms.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use varanbook_auth::tenant::TenantResolver;
use varanbook_entity::tenant::TenantContext;

use crate::state::AppState;

/// Resolve the tenant from the explicit ID header or the host subdomain
/// and attach it to the request.
pub async fn resolve_tenant(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let mut tenant: Option<TenantContext> = None;

    if !TenantResolver::is_tenant_free(request.uri().path()) {
        let header = request
            .headers()
            .get(state.config.tenant.id_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let host = request
            .headers()
            .get("host")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        tenant = state
            .tenant_resolver
            .resolve(header.as_deref(), host.as_deref())
            .await;
    }

    request.extensions_mut().insert(tenant);

    next.run(request).await
}
