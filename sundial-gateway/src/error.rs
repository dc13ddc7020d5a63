//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the executor layer.
    #[error("executor error: {0}")]
    Executor(#[from] sundial_executor::ExecutorError),

    /// The request body or parameters failed validation.
    #[error(transparent)]
    Validation(#[from] sundial_core::CoreError),

    /// The `X-API-Key` header was missing or did not match.
    #[error("Unauthorized")]
    Unauthorized,

    /// A path segment did not satisfy the route's constraint.
    #[error("Not found")]
    NotFound,
}

impl GatewayError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Executor(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            GatewayError::Executor(e) => {
                tracing::error!(error = %e, "command execution failed");
                "Internal server error".to_owned()
            }
            other => other.to_string(),
        };
        (status, Json(json!({"error": message}))).into_response()
    }
}
