//! Error types shared across the service.
//!
//! Store failures are typed with `StoreError`. Everything a caller can observe
//! collapses into `ApiError`, which maps onto a bare HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a `ProblemStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("problem store unavailable: {0}")]
    Unavailable(String),
    #[error("problem store did not answer within {0:?}")]
    Timeout(Duration),
    #[error("malformed problem data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The only outcomes a caller of a public operation ever sees besides success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(reason) => tracing::debug!("Rejected request: {}", reason),
            ApiError::NotFound => {}
            ApiError::Store(e) => tracing::error!("Store failure: {}", e),
            ApiError::Internal(e) => tracing::error!("Internal failure: {}", e),
        }

        // Error responses carry no body, only the status.
        self.status_code().into_response()
    }
}
