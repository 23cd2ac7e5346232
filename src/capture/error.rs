//! Capture error definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while capturing a request.
///
/// All variants are scoped to a single request: each converts to a 4xx
/// response and none may abort the serving loop.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The request target could not be decomposed into URL components.
    #[error("malformed request target: {0:?}")]
    MalformedRequestTarget(String),

    /// A Content-Length header was present but not a non-negative integer.
    #[error("malformed Content-Length header: {0:?}")]
    MalformedContentLength(String),

    /// The connection closed before the declared body length arrived.
    #[error("truncated body: connection closed before {expected} declared bytes arrived")]
    TruncatedBody { expected: u64 },

    /// Body bytes were present but are not valid UTF-8.
    #[error("request body is not valid UTF-8: {0}")]
    BodyNotUtf8(#[source] std::str::Utf8Error),

    /// The declared body length exceeds the configured cap.
    #[error("request body too large: {declared} bytes declared, limit is {limit}")]
    BodyTooLarge { declared: u64, limit: usize },
}

impl CaptureError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            CaptureError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CaptureError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
