//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use varanbook_auth::policy::AccessPolicy;
use varanbook_auth::session::SessionManager;
use varanbook_auth::tenant::TenantResolver;
use varanbook_auth::token::{TokenIssuer, TokenVerifier};
use varanbook_core::config::AppConfig;
use varanbook_core::traits::object_store::ObjectStore;
use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_database::repositories::user::UserRepository;
use varanbook_service::account::AccountService;
use varanbook_service::interest::InterestService;
use varanbook_service::profile::ProfileService;
use varanbook_service::tenant::TenantService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT issuer.
    pub token_issuer: Arc<TokenIssuer>,
    /// JWT verifier.
    pub token_verifier: Arc<TokenVerifier>,
    /// Refresh session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// Per-request tenant resolver.
    pub tenant_resolver: Arc<TenantResolver>,
    /// Access policy evaluator.
    pub access_policy: Arc<AccessPolicy>,

    /// User repository (fresh lookups in the auth extractor).
    pub user_repo: Arc<UserRepository>,
    /// Tenant repository.
    pub tenant_repo: Arc<TenantRepository>,

    /// Account management service.
    pub account_service: Arc<AccountService>,
    /// Profile service.
    pub profile_service: Arc<ProfileService>,
    /// Interest service.
    pub interest_service: Arc<InterestService>,
    /// Tenant registry service.
    pub tenant_service: Arc<TenantService>,

    /// Object storage collaborator for pre-signed uploads.
    pub object_store: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}
