//! File upload handlers.
//!
//! Upload bytes never transit this service: the handler mints a pre-signed
//! PUT URL and the client uploads directly to object storage.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use varanbook_core::error::AppError;
use varanbook_core::traits::object_store::PresignedUpload;

use crate::dto::request::PresignUploadRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /files/presign-upload
pub async fn presign_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PresignUploadRequest>,
) -> Result<Json<PresignedUpload>, ApiError> {
    req.validate()?;

    let tenant_id = auth
        .tenant_id
        .ok_or_else(|| AppError::validation("Tenant context is required"))?;

    let upload = state
        .object_store
        .presign_put(req.purpose, tenant_id, &req.filename, &req.content_type)
        .await?;

    Ok(Json(upload))
}
