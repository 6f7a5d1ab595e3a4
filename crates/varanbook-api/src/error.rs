//! Maps domain `AppError` to HTTP responses.
//!
//! Every error becomes a stable `status + code + message` triple. Internal
//! failure detail never reaches the caller: unclassified errors collapse to
//! a generic 500 payload while the full chain is logged server-side.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use varanbook_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying [`AppError`] across the Axum boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self(AppError::validation(err.to_string()))
    }
}

/// The HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::InvalidCredentials
        | ErrorKind::Unauthenticated
        | ErrorKind::InvalidToken
        | ErrorKind::ExpiredToken
        | ErrorKind::WrongTokenKind
        | ErrorKind::SessionNotFound
        | ErrorKind::SessionExpired => StatusCode::UNAUTHORIZED,
        ErrorKind::AccountDeactivated | ErrorKind::AccessDenied => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::ExternalService
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %err.kind, error = %err, "Internal server error");
            "Internal server error".to_string()
        } else {
            err.message.clone()
        };

        let code = if status == StatusCode::INTERNAL_SERVER_ERROR {
            ErrorKind::Internal.to_string()
        } else {
            err.kind.to_string()
        };

        let body = ApiErrorResponse {
            error: code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_distinct() {
        // Credentials-required, insufficient-role, and not-found are
        // three different statuses.
        assert_eq!(status_for(ErrorKind::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::AccessDenied), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn token_failures_are_unauthorized() {
        for kind in [
            ErrorKind::InvalidToken,
            ErrorKind::ExpiredToken,
            ErrorKind::WrongTokenKind,
            ErrorKind::SessionNotFound,
            ErrorKind::SessionExpired,
        ] {
            assert_eq!(status_for(kind), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn internal_detail_is_collapsed() {
        let err = ApiError(AppError::database("connection refused: 10.0.0.3"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn reset_token_failures_are_bad_request() {
        let err = ApiError(AppError::validation("Invalid or expired reset token"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
