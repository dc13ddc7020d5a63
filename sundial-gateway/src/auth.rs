//! API key authorization middleware.
//!
//! Protected routes require an `X-API-Key` header equal to the configured
//! secret. Anything else is answered with 401 before the handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::GatewayError, state::SharedState};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Axum middleware that rejects requests without a valid API key.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] if the header is absent, is not
/// valid UTF-8, or does not match the configured key.
pub async fn require_api_key(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !state.config.authorize(presented) {
        tracing::warn!(
            path = %request.uri().path(),
            header_present = presented.is_some(),
            "rejected request with invalid API key"
        );
        return Err(GatewayError::Unauthorized);
    }

    Ok(next.run(request).await)
}
