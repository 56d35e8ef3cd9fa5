//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The analysis could not be produced
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Analysis(e) => match e {
                AnalysisError::Configuration { .. } => {
                    (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_ERROR")
                }
                AnalysisError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
                AnalysisError::EmptyResponse => (StatusCode::BAD_GATEWAY, "EMPTY_RESPONSE"),
                AnalysisError::MalformedResponse => {
                    (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE")
                }
                AnalysisError::InvalidShape { .. } => (StatusCode::BAD_GATEWAY, "INVALID_SHAPE"),
                AnalysisError::Transport(_) => (StatusCode::BAD_GATEWAY, "TRANSPORT_FAILURE"),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message returned to the client
    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Analysis(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.public_message(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::Validation("empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Analysis(AnalysisError::Configuration {
                    source_name: "OPENAI_API_KEY".to_string(),
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::Analysis(AnalysisError::Upstream {
                    status: 401,
                    message: None,
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::Analysis(AnalysisError::MalformedResponse),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_and_code().0, status);
        }
    }

    #[test]
    fn test_upstream_public_message_has_status() {
        let error = ApiError::Analysis(AnalysisError::Upstream {
            status: 429,
            message: Some("Rate limit reached".to_string()),
        });
        assert_eq!(
            error.public_message(),
            "API request failed: 429 Too Many Requests. Rate limit reached"
        );
    }
}
