//! Tenant registry handlers (super admin only).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_entity::tenant::{CreateTenant, Tenant, UpdateTenant};

use crate::dto::request::{CreateTenantRequest, TenantListQuery, UpdateTenantRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /admin/tenants — onboard a new matrimonial centre.
pub async fn create_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<Tenant>), ApiError> {
    req.validate()?;

    let tenant = state
        .tenant_service
        .create(
            &auth,
            &CreateTenant {
                name: req.name,
                slug: req.slug,
                domain: req.domain,
                contact_email: req.contact_email,
                contact_phone: req.contact_phone,
                address: req.address,
                plan: req.plan,
                max_users: req.max_users,
                max_admins: req.max_admins,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(tenant)))
}

/// GET /admin/tenants — paginated listing.
pub async fn list_tenants(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TenantListQuery>,
) -> Result<Json<PageResponse<Tenant>>, ApiError> {
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(20),
    };

    let result = state
        .tenant_service
        .list(&auth, query.is_active, &page)
        .await?;
    Ok(Json(result))
}

/// GET /admin/tenants/{id}
pub async fn get_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Tenant>, ApiError> {
    let tenant = state.tenant_service.get(&auth, id).await?;
    Ok(Json(tenant))
}

/// PATCH /admin/tenants/{id}
pub async fn update_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTenantRequest>,
) -> Result<Json<Tenant>, ApiError> {
    let tenant = state
        .tenant_service
        .update(
            &auth,
            id,
            &UpdateTenant {
                name: req.name,
                domain: req.domain,
                contact_email: req.contact_email,
                contact_phone: req.contact_phone,
                address: req.address,
                plan: req.plan,
                max_users: req.max_users,
                max_admins: req.max_admins,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(tenant))
}

/// DELETE /admin/tenants/{id} — soft-deactivate.
pub async fn deactivate_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.tenant_service.deactivate(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
