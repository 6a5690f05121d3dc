//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::DiagnosticError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("AI service is not configured")]
    ServiceUnavailable,
    #[error("AI provider returned an invalid response: {0}")]
    UpstreamContract(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_UNCONFIGURED",
                "AI service is not configured. Please contact support.".to_string(),
            ),
            ApiError::UpstreamContract(detail) => {
                tracing::error!(detail, "provider contract violation");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_RESPONSE_INVALID",
                    "Failed to parse AI response. Please try again.".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<DiagnosticError> for ApiError {
    fn from(err: DiagnosticError) -> Self {
        match err {
            DiagnosticError::Validation(message) => ApiError::BadRequest(message),
            DiagnosticError::MalformedResponse(detail)
            | DiagnosticError::JsonParsing(detail) => ApiError::UpstreamContract(detail),
            DiagnosticError::Unconfigured => ApiError::ServiceUnavailable,
            // Degradable failures are resolved inside the orchestrator; if
            // one escapes (the recommendations path has no fallback tier),
            // it is an upstream availability problem.
            DiagnosticError::InvalidCredential
            | DiagnosticError::QuotaExceeded
            | DiagnosticError::RateLimited
            | DiagnosticError::EmptyResponse => ApiError::ServiceUnavailable,
            DiagnosticError::Transport(detail) => ApiError::Internal(detail),
        }
    }
}
