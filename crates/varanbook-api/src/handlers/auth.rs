//! Auth handlers — login, refresh, logout, and the password flows.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use validator::Validate;

use crate::dto::request::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LogoutRequest, RefreshRequest,
    ResetPasswordRequest,
};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Truncated User-Agent recorded against sessions.
fn device_info(headers: &HeaderMap) -> Option<String> {
    headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(512).collect())
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()?;

    let result = state
        .session_manager
        .login(
            req.email.trim(),
            &req.password,
            device_info(&headers).as_deref(),
        )
        .await?;

    Ok(Json(TokenResponse::bearer(
        result.tokens.access_token,
        result.tokens.refresh_token,
        state.token_issuer.access_ttl_seconds(),
    )))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let tokens = state
        .session_manager
        .rotate(&req.refresh_token, device_info(&headers).as_deref())
        .await?;

    Ok(Json(TokenResponse::bearer(
        tokens.access_token,
        tokens.refresh_token,
        state.token_issuer.access_ttl_seconds(),
    )))
}

/// POST /auth/logout
///
/// Idempotent: revoking a stale or unknown token still returns 204.
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<StatusCode, ApiError> {
    state.session_manager.revoke(&req.refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/forgot-password
///
/// Always 204, whether or not the email exists.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state.account_service.forgot_password(&req.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state
        .account_service
        .reset_password(&req.token, &req.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state
        .account_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
