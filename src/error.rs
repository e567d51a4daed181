//! Error taxonomy: engine errors map to service errors, which map to HTTP
//! responses.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::state::engine::EngineError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Operation attempted outside its valid turn sub-state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// The song pool has no unused entries left.
    #[error("pool exhausted: {0}")]
    Exhausted(String),
}

impl From<EngineError> for ServiceError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::TeamCountOutOfRange(_) => ServiceError::InvalidInput(message),
            EngineError::NoActiveGame => ServiceError::NotFound(message),
            EngineError::NoActiveTurn => ServiceError::InvalidState(message),
            EngineError::PoolExhausted => ServiceError::Exhausted(message),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with the current game state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::InvalidState(message) => AppError::Conflict(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::Exhausted(message) => AppError::Conflict(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_kind() {
        assert!(matches!(
            ServiceError::from(EngineError::TeamCountOutOfRange(12)),
            ServiceError::InvalidInput(_)
        ));
        assert!(matches!(
            ServiceError::from(EngineError::NoActiveGame),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from(EngineError::NoActiveTurn),
            ServiceError::InvalidState(_)
        ));
        assert!(matches!(
            ServiceError::from(EngineError::PoolExhausted),
            ServiceError::Exhausted(_)
        ));
    }

    #[test]
    fn service_errors_map_to_distinct_statuses() {
        let not_found: AppError = ServiceError::NotFound("no active game".into()).into();
        assert!(matches!(not_found, AppError::NotFound(_)));

        let conflict: AppError = ServiceError::InvalidState("no active turn".into()).into();
        assert!(matches!(conflict, AppError::Conflict(_)));

        let bad_request: AppError = ServiceError::InvalidInput("bad team count".into()).into();
        assert!(matches!(bad_request, AppError::BadRequest(_)));
    }
}
