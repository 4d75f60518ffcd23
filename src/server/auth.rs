//! Token authentication middleware (the auth gate)
//!
//! Every `/api` route passes through this gate before any handler logic runs.
//! The gate is a pure comparison of the `api-token` request header against
//! the configured secret: no sessions, no expiry, no rate limiting.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::error::ApiError;

/// Request header carrying the client token
pub const API_TOKEN_HEADER: &str = "api-token";

/// Whether a presented token authorizes the request.
///
/// Missing header, empty header, empty configured secret and mismatched
/// value are all rejected the same way; in particular an empty header never
/// matches an empty secret.
fn token_matches(presented: Option<&str>, secret: &str) -> bool {
    match presented {
        Some(token) => !token.is_empty() && token == secret,
        None => false,
    }
}

/// Axum middleware enforcing the token check.
///
/// On rejection the request is terminated with a generic 401 body; the
/// presented value is never logged or echoed back.
pub async fn require_api_token(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if token_matches(presented, &config.api_token) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(
            path = %request.uri().path(),
            "Rejected request without a valid api-token header"
        );
        Err(ApiError::Unauthorized)
    }
}
