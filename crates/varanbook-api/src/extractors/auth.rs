//! `AuthUser` extractor — validates the bearer token and builds the
//! request context.
//!
//! Authorization re-derives from the token plus fresh user and tenant
//! lookups on every request; there is no cross-request cache to invalidate
//! when a tenant is deactivated or a role changes mid-session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use varanbook_core::error::AppError;
use varanbook_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Credentials required"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = state.token_verifier.decode_access(token)?;

        // Fresh lookup: the account may have been deactivated or re-roled
        // since the token was issued.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::invalid_token("Could not validate credentials"))?;

        if let Some(tenant_id) = user.tenant_id {
            let tenant = state.tenant_repo.find_active_by_id(tenant_id).await?;
            if tenant.is_none() {
                return Err(ApiError(AppError::account_deactivated(
                    "This matrimonial centre is no longer active.",
                )));
            }
        }

        Ok(AuthUser(RequestContext::new(
            user.id,
            user.tenant_id,
            user.role,
            user.email,
        )))
    }
}
