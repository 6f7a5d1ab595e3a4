//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;

use varanbook_core::config::AppConfig;
use varanbook_core::error::AppError;
use varanbook_core::traits::object_store::ObjectStore;
use varanbook_core::traits::queue::JobQueue;

use varanbook_database::repositories::interest::InterestRepository;
use varanbook_database::repositories::job::NotificationJobRepository;
use varanbook_database::repositories::profile::ProfileRepository;
use varanbook_database::repositories::reset::PasswordResetRepository;
use varanbook_database::repositories::session::RefreshSessionRepository;
use varanbook_database::repositories::tenant::TenantRepository;
use varanbook_database::repositories::user::UserRepository;

use varanbook_auth::password::{PasswordHasher, PasswordPolicy};
use varanbook_auth::policy::AccessPolicy;
use varanbook_auth::session::SessionManager;
use varanbook_auth::tenant::TenantResolver;
use varanbook_auth::token::{TokenIssuer, TokenVerifier};

use varanbook_service::account::AccountService;
use varanbook_service::interest::InterestService;
use varanbook_service::notify::{NotificationService, RelayMailer};
use varanbook_service::profile::ProfileService;
use varanbook_service::tenant::TenantService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let tenant_repo = Arc::new(TenantRepository::new(db_pool.clone()));
    let session_repo = Arc::new(RefreshSessionRepository::new(db_pool.clone()));
    let reset_repo = Arc::new(PasswordResetRepository::new(db_pool.clone()));
    let profile_repo = Arc::new(ProfileRepository::new());
    let interest_repo = Arc::new(InterestRepository::new());
    let job_queue: Arc<dyn JobQueue> =
        Arc::new(NotificationJobRepository::new(db_pool.clone()));

    // Auth
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_policy = Arc::new(PasswordPolicy::new(&config.auth));
    let token_issuer = Arc::new(TokenIssuer::new(&config.auth));
    let token_verifier = Arc::new(TokenVerifier::new(&config.auth));
    let access_policy = Arc::new(AccessPolicy::new());
    let tenant_resolver = Arc::new(TenantResolver::new(Arc::clone(&tenant_repo)));

    let session_manager = Arc::new(SessionManager::new(
        db_pool.clone(),
        Arc::clone(&token_issuer),
        Arc::clone(&token_verifier),
        Arc::clone(&session_repo),
        Arc::clone(&user_repo),
        Arc::clone(&tenant_repo),
        Arc::clone(&password_hasher),
    ));

    // Collaborators
    let mailer = Arc::new(RelayMailer::new(config.email.clone()));
    let object_store: Arc<dyn ObjectStore> =
        Arc::new(varanbook_storage::S3ObjectStore::new(&config.storage).await);

    let notifications = Arc::new(NotificationService::new(
        mailer,
        Arc::clone(&job_queue),
        config.email.clone(),
    ));

    // Services
    let account_service = Arc::new(AccountService::new(
        db_pool.clone(),
        Arc::clone(&user_repo),
        Arc::clone(&tenant_repo),
        Arc::clone(&reset_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
        Arc::clone(&notifications),
        config.auth.clone(),
    ));
    let profile_service = Arc::new(ProfileService::new(
        db_pool.clone(),
        Arc::clone(&profile_repo),
        Arc::clone(&access_policy),
    ));
    let interest_service = Arc::new(InterestService::new(
        db_pool.clone(),
        Arc::clone(&interest_repo),
        Arc::clone(&profile_repo),
        Arc::clone(&notifications),
    ));
    let tenant_service = Arc::new(TenantService::new(
        Arc::clone(&tenant_repo),
        Arc::clone(&access_policy),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        token_issuer,
        token_verifier,
        session_manager,
        tenant_resolver,
        access_policy,
        user_repo,
        tenant_repo,
        account_service,
        profile_service,
        interest_service,
        tenant_service,
        object_store,
    }
}

/// Run the Varanbook server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Varanbook server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
