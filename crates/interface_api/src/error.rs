//! API error handling
//!
//! Each status code carries a fixed user-facing message; only validation
//! failures (400 and 422) pass their detail through to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use domain_motor::QuoteError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Server error ({status}): {detail}")]
    Server { status: StatusCode, detail: String },

    #[error("Unexpected status {status}: {detail}")]
    Unexpected { status: StatusCode, detail: String },
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    /// Creates a 500 error
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    /// Rebuilds an error from a response status, as a client would see it
    pub fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_default();
        match status.as_u16() {
            400 => ApiError::BadRequest(detail),
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(detail),
            409 => ApiError::Conflict(detail),
            422 => ApiError::Validation(detail),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::Server { status, detail },
            _ => ApiError::Unexpected { status, detail },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Server { status, .. } | ApiError::Unexpected { status, .. } => *status,
        }
    }

    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => "validation",
            ApiError::Unauthorized => "authentication",
            ApiError::Forbidden => "forbidden",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::RateLimited => "rate_limit",
            ApiError::Server { .. } => "server",
            ApiError::Unexpected { .. } => "unknown",
        }
    }

    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest(detail) if detail.trim().is_empty() => "Invalid request".to_string(),
            ApiError::BadRequest(detail) | ApiError::Validation(detail) => detail.clone(),
            ApiError::Unauthorized => "Authentication required".to_string(),
            ApiError::Forbidden => "Access forbidden".to_string(),
            ApiError::NotFound(_) => "Resource not found".to_string(),
            ApiError::Conflict(_) => "Resource already exists".to_string(),
            ApiError::RateLimited => "Too many requests. Please try again later".to_string(),
            ApiError::Server { .. } => "Server error. Please try again later".to_string(),
            ApiError::Unexpected { .. } => "An unexpected error occurred. Please try again".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Server { status, detail } = &self {
            error!(status = %status, detail = %detail, "request failed");
        }

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.user_message(),
            details: None,
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::EligibilityViolation(failure) => ApiError::Validation(failure.reason()),
            QuoteError::CalculationFault(detail) => ApiError::internal(detail),
            input => ApiError::BadRequest(input.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}
