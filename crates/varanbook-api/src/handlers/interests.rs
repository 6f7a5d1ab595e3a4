//! Interest (shortlist) handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use varanbook_entity::interest::{CreateInterest, Interest};

use crate::dto::request::{InterestListQuery, RespondInterestRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /interests — express interest in a profile.
pub async fn express_interest(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateInterest>,
) -> Result<(StatusCode, Json<Interest>), ApiError> {
    let interest = state.interest_service.express(&auth, &req).await?;
    Ok((StatusCode::CREATED, Json(interest)))
}

/// GET /interests/sent
pub async fn list_sent(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<InterestListQuery>,
) -> Result<Json<Vec<Interest>>, ApiError> {
    let items = state
        .interest_service
        .sent(
            &auth,
            query.limit.unwrap_or(50).clamp(1, 100),
            query.offset.unwrap_or(0).max(0),
        )
        .await?;
    Ok(Json(items))
}

/// GET /interests/received
pub async fn list_received(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<InterestListQuery>,
) -> Result<Json<Vec<Interest>>, ApiError> {
    let items = state
        .interest_service
        .received(
            &auth,
            query.limit.unwrap_or(50).clamp(1, 100),
            query.offset.unwrap_or(0).max(0),
        )
        .await?;
    Ok(Json(items))
}

/// PATCH /interests/{id} — accept or reject (recipient only).
pub async fn respond_interest(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RespondInterestRequest>,
) -> Result<Json<Interest>, ApiError> {
    let interest = state.interest_service.respond(&auth, id, req.status).await?;
    Ok(Json(interest))
}

/// DELETE /interests/{id} — withdraw (sender only).
pub async fn withdraw_interest(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.interest_service.withdraw(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
