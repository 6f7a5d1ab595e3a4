//! Route definitions for the Varanbook HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Tenant resolution runs before every route; the auth
//! endpoints and the tenant registry are tenant-free by path.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(tenant_routes())
        .merge(profile_routes())
        .merge(interest_routes())
        .merge(file_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, refresh, logout, password flows.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/forgot-password", post(handlers::auth::forgot_password))
        .route("/auth/reset-password", post(handlers::auth::reset_password))
        .route("/auth/change-password", post(handlers::auth::change_password))
}

/// User onboarding and self-service.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::register_member))
        .route("/users/admin", post(handlers::users::onboard_admin))
        .route("/users/me", get(handlers::users::get_me))
        .route("/users/me", patch(handlers::users::update_me))
}

/// Super-admin tenant registry.
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/tenants", post(handlers::tenants::create_tenant))
        .route("/admin/tenants", get(handlers::tenants::list_tenants))
        .route("/admin/tenants/{id}", get(handlers::tenants::get_tenant))
        .route("/admin/tenants/{id}", patch(handlers::tenants::update_tenant))
        .route(
            "/admin/tenants/{id}",
            delete(handlers::tenants::deactivate_tenant),
        )
}

/// Matrimonial profiles.
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(handlers::profiles::create_profile))
        .route("/profiles", get(handlers::profiles::list_profiles))
        .route("/profiles/me", get(handlers::profiles::get_my_profile))
        .route("/profiles/{id}", get(handlers::profiles::get_profile))
        .route("/profiles/{id}", patch(handlers::profiles::update_profile))
        .route("/profiles/{id}", delete(handlers::profiles::delete_profile))
        .route(
            "/profiles/{id}/attachments",
            post(handlers::profiles::attach_upload),
        )
}

/// Interests (shortlists).
fn interest_routes() -> Router<AppState> {
    Router::new()
        .route("/interests", post(handlers::interests::express_interest))
        .route("/interests/sent", get(handlers::interests::list_sent))
        .route("/interests/received", get(handlers::interests::list_received))
        .route("/interests/{id}", patch(handlers::interests::respond_interest))
        .route(
            "/interests/{id}",
            delete(handlers::interests::withdraw_interest),
        )
}

/// Pre-signed uploads.
fn file_routes() -> Router<AppState> {
    Router::new().route("/files/presign-upload", post(handlers::files::presign_upload))
}

/// Health probe (no auth, no tenant).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
