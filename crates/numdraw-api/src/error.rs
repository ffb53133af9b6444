//! Numdraw API: error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numdraw_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// For capacity errors, how many values the request is short by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<u64>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            DomainError::Capacity { .. } => (StatusCode::BAD_REQUEST, "capacity_error"),
            DomainError::InvalidSession(_) => (StatusCode::BAD_REQUEST, "invalid_session"),
            DomainError::GenerationExhausted { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "generation_exhausted")
            }
            DomainError::Persistence(_) => (StatusCode::BAD_GATEWAY, "persistence_error"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let shortfall = match &self.0 {
            DomainError::Capacity { shortfall, .. } => Some(*shortfall),
            _ => None,
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            shortfall,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_capacity_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Capacity {
                requested: 10,
                available: 5,
                shortfall: 5,
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_invalid_session_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidSession("gone".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_generation_exhausted_maps_to_503() {
        assert_eq!(
            status_of(DomainError::GenerationExhausted { attempts: 50 }),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_persistence_maps_to_502() {
        assert_eq!(
            status_of(DomainError::Persistence("down".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
