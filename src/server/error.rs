//! Error types for the REST API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Invalid parameter in request
    InvalidParameter(String),
    /// Record source could not be queried
    SourceUnavailable(String),
    /// Internal server error
    InternalError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ApiError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::InvalidParameter(msg) => {
                (StatusCode::BAD_REQUEST, "InvalidParameter", msg.clone())
            }
            ApiError::SourceUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, "SourceUnavailable", msg.clone())
            }
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

// Conversions from engine and provider errors

impl From<crate::error::EngineError> for ApiError {
    fn from(err: crate::error::EngineError) -> Self {
        // Every engine error is a caller-input violation
        ApiError::InvalidParameter(err.to_string())
    }
}

impl From<crate::earnings::ProviderError> for ApiError {
    fn from(err: crate::earnings::ProviderError) -> Self {
        match err {
            crate::earnings::ProviderError::SourceUnavailable(msg) => {
                ApiError::SourceUnavailable(msg)
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}
