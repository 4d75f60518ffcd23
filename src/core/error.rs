//! Typed error handling for the widget API
//!
//! Every error the HTTP surface can produce is a variant of [`ApiError`],
//! which knows its own status code, stable error code, and response body.
//!
//! # Error taxonomy
//!
//! - `Unauthorized`: the auth gate rejected the request (401, generic body)
//! - `WidgetNotFound`: an id-scoped route could not resolve its id (404)
//! - `Validation`: a create/update payload violated field constraints (400,
//!   with the failing fields enumerated in `details.fields`)
//! - `Storage`: the store failed; request-fatal, no retries (500, the
//!   underlying cause is logged but never leaked to the caller)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::widget::WidgetId;

/// A single failing field in a create/update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending payload field
    pub field: &'static str,
    /// Human-readable constraint description
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The main error type for the widget API
#[derive(Debug)]
pub enum ApiError {
    /// Request did not carry a valid `api-token` header
    Unauthorized,

    /// No Widget exists with the requested id
    WidgetNotFound { id: WidgetId },

    /// Payload validation failed; every violation is reported
    Validation(Vec<FieldViolation>),

    /// Storage backend failure (request-fatal)
    Storage(anyhow::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::WidgetNotFound { id } => {
                write!(f, "widget with id '{}' not found", id)
            }
            ApiError::Validation(violations) => {
                write!(
                    f,
                    "Invalid widget payload ({} violation(s))",
                    violations.len()
                )
            }
            ApiError::Storage(_) => write!(f, "Storage operation failed"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Storage(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::WidgetNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::WidgetNotFound { .. } => "WIDGET_NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    ///
    /// Unauthorized and Storage stay generic; they must not leak internals.
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::WidgetNotFound { id } => Some(serde_json::json!({ "id": id })),
            ApiError::Validation(violations) => {
                Some(serde_json::json!({ "fields": violations }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(cause) = &self {
            tracing::error!(error = %cause, "Storage failure while handling request");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
