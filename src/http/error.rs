//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;

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
/// The evaluator has no I/O and no partial-failure modes, so the only
/// handler-level failure is input rejected by the lifecycle core; it maps to
/// a 400 with the core's stable error code.
#[derive(Debug)]
pub enum AppError {
    /// Input rejected by the lifecycle core
    Lifecycle(LifecycleError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Lifecycle(e) = self;

        let mut body = ApiError::new(e.code(), e.to_string());
        if let LifecycleError::InvalidTimestamp { source, .. } = &e {
            body = body.with_details(source.to_string());
        }

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        AppError::Lifecycle(err)
    }
}
