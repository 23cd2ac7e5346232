//! The request snapshot record.
//!
//! # Responsibilities
//! - Assemble one immutable RequestRecord per incoming request
//! - Collapse the header container into an ordered name → value map
//! - Decode the body as UTF-8, keeping decoding failures distinct
//!
//! # Design Decisions
//! - The record is fully populated before any output is produced
//! - Every field is present even when empty; only `body` may be null
//! - Repeated header names collapse last-one-wins, keeping the position of
//!   the first occurrence (hyper lowercases names on the way in)

use std::net::SocketAddr;

use axum::http::{HeaderMap, Method, Version};
use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::capture::error::CaptureError;
use crate::capture::query::parse_query;
use crate::capture::target::ParsedTarget;

/// Immutable snapshot of one HTTP request.
///
/// Built once per request, serialized once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub timestamp: String,
    pub basic_info: BasicInfo,
    pub parsed_url: ParsedTarget,
    pub query_parameters: Map<String, Value>,
    pub headers: Map<String, Value>,
    pub body: Option<String>,
}

/// Request line and connection endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct BasicInfo {
    pub protocol: String,
    pub method: String,
    pub path: String,
    pub client_address: String,
    pub client_port: u16,
    pub server_address: String,
    pub server_port: u16,
}

impl RequestRecord {
    /// Assemble a record from the parts of one request.
    ///
    /// `timestamp` is taken by the caller at the moment handling begins.
    /// `body` is the raw bytes read per Content-Length, or `None` when the
    /// request declared no body.
    #[allow(clippy::too_many_arguments)]
    pub fn capture(
        timestamp: String,
        method: &Method,
        version: Version,
        raw_target: &str,
        client_addr: SocketAddr,
        server_addr: SocketAddr,
        headers: &HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<Self, CaptureError> {
        let parsed_url = ParsedTarget::parse(raw_target)?;
        let query_parameters = parse_query(&parsed_url.query);

        let body = match body {
            None => None,
            Some(bytes) => Some(
                String::from_utf8(bytes)
                    .map_err(|e| CaptureError::BodyNotUtf8(e.utf8_error()))?,
            ),
        };

        Ok(Self {
            timestamp,
            basic_info: BasicInfo {
                protocol: format!("{version:?}"),
                method: method.to_string(),
                path: raw_target.to_string(),
                client_address: client_addr.ip().to_string(),
                client_port: client_addr.port(),
                server_address: server_addr.ip().to_string(),
                server_port: server_addr.port(),
            },
            parsed_url,
            query_parameters,
            headers: headers_snapshot(headers),
            body,
        })
    }
}

/// Wall-clock capture instant: ISO-8601 local time with sub-second precision.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Collapse a header container into an ordered name → value map.
///
/// Non-UTF-8 header bytes are replaced lossily; the snapshot is diagnostic
/// output, not a wire-faithful re-encoding of the header block.
fn headers_snapshot(headers: &HeaderMap) -> Map<String, Value> {
    let mut snapshot = Map::new();
    for (name, value) in headers.iter() {
        let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
        snapshot.insert(name.as_str().to_string(), Value::String(text));
    }
    snapshot
}
