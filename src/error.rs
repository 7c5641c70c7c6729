//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::config::ConfigError;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Client Errors**: Missing or invalid request fields
/// - **Signature Errors**: Webhook signature did not match
/// - **Transport Errors**: Dwolla or Plaid could not be reached
/// - **Upstream Errors**: Dwolla answered with an unexpected status
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Webhook signature did not match the configured secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Outbound request failed before a response was received.
    ///
    /// Returns HTTP 500 with the underlying message.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Dwolla responded with a status other than the one expected.
    ///
    /// The upstream status code and body are relayed to the caller.
    #[error("{message}")]
    UpstreamStatus {
        status: StatusCode,
        message: String,
        details: Value,
    },

    /// Plaid did not hand out a processor token.
    #[error("Failed to get processor token from Plaid")]
    ProcessorToken(String),

    /// Upstream answered successfully but not in the shape we rely on.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidSignature => StatusCode::UNAUTHORIZED,
            AppError::UpstreamStatus { status, .. } => *status,
            AppError::Http(_) | AppError::ProcessorToken(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::InvalidSignature => "invalid_signature",
            AppError::Http(_) => "upstream_unreachable",
            AppError::UpstreamStatus { .. } => "upstream_error",
            AppError::ProcessorToken(_) => "processor_token_failed",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// Malformed or mistyped JSON bodies are client errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message",
///     "details": { "...": "upstream body, when there is one" }
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `InvalidSignature` → 401 Unauthorized
/// - `UpstreamStatus` → whatever Dwolla returned
/// - `Http`, `ProcessorToken`, `Internal` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        let details = match self {
            AppError::UpstreamStatus { details, .. } => Some(details),
            AppError::ProcessorToken(reason) => Some(Value::String(reason)),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(code, %message, "Request failed");
        }

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Errors that keep the server from entering its serving state.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to get Dwolla access token: {0}")]
    Token(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
