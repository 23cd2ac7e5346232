//! Capture-and-echo handler.
//!
//! # Responsibilities
//! - Timestamp each request at the moment handling begins
//! - Read exactly Content-Length body bytes, never more
//! - Assemble the RequestRecord and serialize it once
//! - Emit the operational log snapshot (best effort)
//! - Echo the snapshot back as pretty-printed JSON
//!
//! # Design Decisions
//! - Stateless: a pure function of one request, safe under concurrent
//!   invocation with no locking
//! - Every capture failure becomes a 4xx response; nothing propagates as a
//!   fault to the serving loop

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::capture::record::now_timestamp;
use crate::capture::{CaptureError, RequestRecord};
use crate::http::server::AppState;

/// Handle one GET or POST request: capture, log, echo.
pub async fn inspect_handler(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    match capture_request(&state, client_addr, request).await {
        Ok(record) => echo_response(&record),
        Err(err) => {
            tracing::warn!(client = %client_addr, error = %err, "Request capture failed");
            err.into_response()
        }
    }
}

/// Build the RequestRecord for one request.
///
/// Only the body read is asynchronous; everything else is delegated to the
/// pure capture layer.
async fn capture_request(
    state: &AppState,
    client_addr: SocketAddr,
    request: Request<Body>,
) -> Result<RequestRecord, CaptureError> {
    let timestamp = now_timestamp();

    let (parts, body) = request.into_parts();
    let raw_target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.to_string());

    let body_bytes = match declared_content_length(&parts.headers)? {
        None | Some(0) => None,
        Some(declared) => {
            if declared > state.limits.max_body_size as u64 {
                return Err(CaptureError::BodyTooLarge {
                    declared,
                    limit: state.limits.max_body_size,
                });
            }
            let bytes = axum::body::to_bytes(body, declared as usize)
                .await
                .map_err(|_| CaptureError::TruncatedBody { expected: declared })?;
            if (bytes.len() as u64) < declared {
                return Err(CaptureError::TruncatedBody { expected: declared });
            }
            Some(bytes.to_vec())
        }
    };

    RequestRecord::capture(
        timestamp,
        &parts.method,
        parts.version,
        &raw_target,
        client_addr,
        state.server_addr,
        &parts.headers,
        body_bytes,
    )
}

/// Serialize the record once, feeding both the log and the response.
fn echo_response(record: &RequestRecord) -> Response {
    let json = match serde_json::to_string_pretty(record) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize request snapshot");
            return (StatusCode::INTERNAL_SERVER_ERROR, "snapshot serialization failed")
                .into_response();
        }
    };

    // Best-effort operational log; the response is sent regardless.
    tracing::info!("\n=== New Request ===\n{json}");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response()
}

/// Extract and parse the Content-Length header.
///
/// Absent header means no body. A present but unparseable value is a
/// per-request error, not a reason to guess.
fn declared_content_length(headers: &HeaderMap) -> Result<Option<u64>, CaptureError> {
    let Some(value) = headers.get(header::CONTENT_LENGTH) else {
        return Ok(None);
    };
    let text = value.to_str().map_err(|_| {
        CaptureError::MalformedContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;
    text.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| CaptureError::MalformedContentLength(text.to_string()))
}
