//! # Application Error
//!
//! Maps domain and infrastructure errors to structured HTTP responses.
//! Every error body has the same shape:
//!
//! ```json
//! { "timestamp": "...", "status": 400, "error": "Business rule", "message": "..." }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use thiserror::Error;

use kanban_core::DomainError;
use kanban_state::TransitionError;
use kanban_store::StoreError;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A business rule rejected the request.
    #[error("{0}")]
    Business(String),

    /// The referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request payload or parameters failed validation.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials/token.
    #[error("{0}")]
    Unauthorized(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Business(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::Business(_) => "Business rule",
            ApiError::NotFound(_) => "Not found",
            ApiError::Validation(_) => "Validation",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Unexpected failures get logged with detail but answer generically.
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "Unexpected error".to_string()
            }
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "error": self.label(),
            "message": message,
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Business(msg) => ApiError::Business(msg),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        ApiError::Business(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Business("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_transition_error_maps_to_business() {
        let err: ApiError = TransitionError::DelayedBeforePlannedStart.into();
        assert!(matches!(err, ApiError::Business(_)));
    }
}
