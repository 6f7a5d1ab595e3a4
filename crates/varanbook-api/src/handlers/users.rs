//! User handlers — registration, admin onboarding, self-service.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use varanbook_core::error::AppError;
use varanbook_entity::user::UpdateUser;

use crate::dto::request::{OnboardAdminRequest, RegisterMemberRequest, UpdateMeRequest};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ResolvedTenant};
use crate::state::AppState;

/// POST /users — member self-registration within the resolved tenant.
pub async fn register_member(
    State(state): State<AppState>,
    ResolvedTenant(tenant): ResolvedTenant,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let tenant =
        tenant.ok_or_else(|| AppError::validation("Tenant context is required"))?;

    let user = state
        .account_service
        .register_member(&tenant, &req.email, &req.password, &req.full_name, req.phone)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /users/admin — admin onboarding.
pub async fn onboard_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<OnboardAdminRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let user = state
        .account_service
        .onboard_admin(
            &auth,
            req.tenant_id,
            &req.email,
            &req.password,
            &req.full_name,
            req.phone,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.account_service.get_me(&auth).await?;
    Ok(Json(user.into()))
}

/// PATCH /users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()?;

    let user = state
        .account_service
        .update_me(
            &auth,
            &UpdateUser {
                full_name: req.full_name,
                phone: req.phone,
                push_token: req.push_token,
            },
        )
        .await?;

    Ok(Json(user.into()))
}
