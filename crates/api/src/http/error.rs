//! HTTP error handling and response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use meetline_domain::MeetlineError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or unusable credential
    Unauthorized(String),
    /// Invalid request parameters
    BadRequest(String),
    /// Any failure while producing the report; the detail stays in the logs.
    Internal(MeetlineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ApiError::new("UNAUTHORIZED", msg))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Internal(err) => {
                error!(kind = err.label(), error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "Internal Server Error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<MeetlineError> for AppError {
    fn from(err: MeetlineError) -> Self {
        AppError::Internal(err)
    }
}
