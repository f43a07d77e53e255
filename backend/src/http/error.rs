//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
///
/// The services themselves never fail; these cover transport problems and
/// lookups that the caller asked for explicitly.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Request body could not be read as the expected JSON shape
    InvalidBody {
        status: StatusCode,
        message: String,
        details: String,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::InvalidBody {
                status,
                message,
                details,
            } => {
                let code = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    _ => "BAD_REQUEST",
                };
                (status, ApiError::new(code, message).with_details(details))
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Shape and syntax problems are both plain 400s; anything else keeps
        // the status axum chose (415 for content type, 413 for size).
        let (status, message) = match &rejection {
            JsonRejection::JsonDataError(_) => (
                StatusCode::BAD_REQUEST,
                "Request body does not match the expected shape",
            ),
            JsonRejection::JsonSyntaxError(_) => {
                (StatusCode::BAD_REQUEST, "Request body is not valid JSON")
            }
            JsonRejection::MissingJsonContentType(_) => (
                rejection.status(),
                "Expected `Content-Type: application/json`",
            ),
            _ => (rejection.status(), "Failed to read request body"),
        };
        AppError::InvalidBody {
            status,
            message: message.to_string(),
            details: rejection.body_text(),
        }
    }
}
