//! Request parameter encoding
//!
//! `GET` carries params in the query string; every other verb sends them as
//! a JSON body.

use crate::error::Result;
use serde_json::{Map, Value};
use url::Url;

/// String-keyed, JSON-serializable request parameters.
pub type Params = Map<String, Value>;

/// Append `params` to the query string of `url`.
///
/// Strings are sent verbatim, numbers and booleans as their JSON text, and
/// `null` entries are skipped. Arrays repeat the key once per element.
/// Objects and nested arrays are sent as JSON text. Nothing is appended when
/// no pair survives, so the URL keeps no dangling `?`.
pub fn append_query(url: &mut Url, params: &Params) {
    let pairs: Vec<(&str, String)> = params
        .iter()
        .flat_map(|(key, value)| {
            query_values(value)
                .into_iter()
                .map(move |v| (key.as_str(), v))
        })
        .collect();

    if pairs.is_empty() {
        return;
    }

    url.query_pairs_mut().extend_pairs(pairs);
}

/// Encode `params` as a JSON request body. An empty map encodes as `{}`.
pub fn encode_body(params: &Params) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(params)?)
}

fn query_values(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar).collect(),
        other => scalar(other).into_iter().collect(),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
