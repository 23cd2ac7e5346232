//! Query string parsing.
//!
//! # Responsibilities
//! - Decode a raw query string into a key → ordered-values multimap
//! - Apply form-encoding rules: percent escapes and `+` as space
//!
//! # Design Decisions
//! - Resilience over strictness: a garbled query yields an empty or partial
//!   mapping, never a request failure
//! - Key order follows first occurrence; repeated-value order is preserved
//! - Pairs with a blank value are dropped, per lenient form parsing

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Parse a raw query string into an ordered multimap.
pub fn parse_query(query: &str) -> Map<String, Value> {
    let mut params = Map::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let entry = params
            .entry(key.into_owned())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(values) = entry {
            values.push(Value::String(value.into_owned()));
        }
    }
    params
}
