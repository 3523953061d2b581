//! API error translation
//!
//! [`ApiError`] is the single place where storage and validation outcomes
//! become HTTP status codes. Handlers return `Result<_, ApiError>` and rely
//! on the `From` impls below; they never pick status codes themselves, with
//! one exception: the fixed 400 for collection-root DELETE, which is the
//! `MissingId` variant constructed before storage is ever touched.
//!
//! Success bodies are the bare record JSON. Error bodies carry a machine
//! code and a human message:
//!
//! ```json
//! { "success": false, "error": { "code": "NOT_FOUND", "message": "forest not found" } }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::features::shared::validation::ValidationError;
use crate::store::StoreError;

/// Standard error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Domain outcomes tagged with their HTTP meaning
#[derive(Debug)]
pub enum ApiError {
    /// A required field is missing or malformed (400)
    Validation(String),
    /// An operation that needs an identifier was invoked without one (400)
    MissingId,
    /// The identifier does not resolve, or is malformed (404)
    NotFound(String),
    /// Unique-name constraint violation (409)
    Conflict(String),
    /// Unexpected failure; details are logged, not returned (500)
    Internal(String),
}

/// Alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            ApiError::MissingId => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "An identifier is required for this operation".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            },
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(resource) => ApiError::NotFound(format!("{} not found", resource)),
            // Malformed ids answer 404 like unknown ids, matching the
            // observed contract.
            StoreError::MalformedId(raw) => {
                ApiError::NotFound(format!("'{}' does not resolve to a record", raw))
            },
            StoreError::Duplicate { resource, name } => {
                ApiError::Conflict(format!("A {} named '{}' already exists", resource, name))
            },
            StoreError::Backend(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}
