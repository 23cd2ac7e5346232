//! Request target decomposition.
//!
//! # Responsibilities
//! - Split a request target into scheme/netloc/path/params/query/fragment
//! - Accept origin-form targets ("/path?query") and absolute-form targets
//! - Reject targets that fit neither form
//!
//! # Design Decisions
//! - Origin-form targets leave scheme and netloc empty
//! - `params` is the `;`-suffix of the last path segment only
//! - Components are captured raw; percent-decoding happens in query parsing

use serde::Serialize;

use crate::capture::error::CaptureError;

/// Decomposition of a request target into URL components.
///
/// Every component is always present; absent parts are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTarget {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedTarget {
    /// Decompose a request target.
    ///
    /// Fails with `MalformedRequestTarget` when the target is empty or is
    /// neither origin-form nor absolute-form.
    pub fn parse(target: &str) -> Result<Self, CaptureError> {
        if target.is_empty() {
            return Err(CaptureError::MalformedRequestTarget(target.to_string()));
        }

        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) => (rest, fragment),
            None => (target, ""),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, query),
            None => (rest, ""),
        };

        let (scheme, netloc, path) = split_authority(rest)
            .ok_or_else(|| CaptureError::MalformedRequestTarget(target.to_string()))?;
        let (path, params) = split_params(path);

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }
}

/// Split scheme and network location off the front of a target.
///
/// Origin-form targets ("/path") have neither. Absolute-form targets carry
/// both; network-path references ("//host/path") carry only the location.
fn split_authority(rest: &str) -> Option<(&str, &str, &str)> {
    if let Some(after) = rest.strip_prefix("//") {
        return Some(split_netloc("", after));
    }
    if rest.starts_with('/') {
        return Some(("", "", rest));
    }
    let (scheme, remainder) = split_scheme(rest)?;
    match remainder.strip_prefix("//") {
        Some(after) => Some(split_netloc(scheme, after)),
        None => Some((scheme, "", remainder)),
    }
}

fn split_netloc<'a>(scheme: &'a str, after: &'a str) -> (&'a str, &'a str, &'a str) {
    match after.find('/') {
        Some(i) => (scheme, &after[..i], &after[i..]),
        None => (scheme, after, ""),
    }
}

/// Split a leading URL scheme: an ASCII letter followed by letters, digits,
/// `+`, `-`, or `.`, terminated by a colon.
fn split_scheme(target: &str) -> Option<(&str, &str)> {
    let colon = target.find(':')?;
    let scheme = &target[..colon];
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, &target[colon + 1..]))
}

/// Split `;`-style path parameters off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(i) => {
            let split = segment_start + i;
            (&path[..split], &path[split + 1..])
        }
        None => (path, ""),
    }
}
