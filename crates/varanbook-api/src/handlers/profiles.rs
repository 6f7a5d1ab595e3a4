//! Matrimonial profile handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_entity::profile::{CreateProfile, Profile, UpdateProfile};

use crate::dto::request::{AttachUploadRequest, ProfileListQuery};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ResolvedTenant};
use crate::state::AppState;

/// POST /profiles — create the caller's biodata profile.
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProfile>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let profile = state.profile_service.create(&auth, &req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /profiles — list profiles in the tenant (admin and above).
pub async fn list_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
    ResolvedTenant(tenant): ResolvedTenant,
    Query(query): Query<ProfileListQuery>,
) -> Result<Json<PageResponse<Profile>>, ApiError> {
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(20),
    };

    let result = state
        .profile_service
        .list(
            &auth,
            tenant.map(|t| t.id),
            query.gender,
            query.status,
            &page,
        )
        .await?;

    Ok(Json(result))
}

/// GET /profiles/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profile_service.get_mine(&auth).await?;
    Ok(Json(profile))
}

/// GET /profiles/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profile_service.get(&auth, id).await?;
    Ok(Json(profile))
}

/// PATCH /profiles/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfile>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profile_service.update(&auth, id, &req).await?;
    Ok(Json(profile))
}

/// POST /profiles/{id}/attachments — record an uploaded object key.
pub async fn attach_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AttachUploadRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state
        .profile_service
        .attach_upload(&auth, id, req.purpose, &req.key)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /profiles/{id} — admin and above.
pub async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.profile_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
