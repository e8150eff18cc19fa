//! Unwrapping of list envelopes.
//!
//! List endpoints answer with a JSON array where every element wraps the
//! real record under a single resource key:
//!
//! ```text
//! [{"cursor": "abc", "service": {"id": "srv-1", ...}}, ...]
//! ```
//!
//! Sibling keys such as `cursor` are ignored. Output order always matches
//! the order of the array.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Unwrap every element of `body` from under `key`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] if `body` is not an array, if an
/// element is not an object carrying `key`, or if the wrapped object does
/// not decode into `T`.
pub fn unwrap_envelope<T: DeserializeOwned>(body: Value, key: &str, endpoint: &str) -> Result<Vec<T>> {
    unwrap_items(body, key, endpoint, false)
}

/// Like [`unwrap_envelope`], but also accepts bare records: objects without
/// `key` that carry an `id` are decoded as-is.
pub fn unwrap_envelope_or_bare<T: DeserializeOwned>(
    body: Value,
    key: &str,
    endpoint: &str,
) -> Result<Vec<T>> {
    unwrap_items(body, key, endpoint, true)
}

fn unwrap_items<T: DeserializeOwned>(
    body: Value,
    key: &str,
    endpoint: &str,
    allow_bare: bool,
) -> Result<Vec<T>> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(ClientError::InvalidResponse(format!(
                "{endpoint}: expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let inner = match item {
                Value::Object(mut map) => match map.remove(key) {
                    Some(inner) => inner,
                    None if allow_bare && map.contains_key("id") => Value::Object(map),
                    None => {
                        return Err(ClientError::InvalidResponse(format!(
                            "{endpoint}: element {index} has no `{key}` key"
                        )));
                    }
                },
                other => {
                    return Err(ClientError::InvalidResponse(format!(
                        "{endpoint}: element {index} is {}, expected an object with `{key}`",
                        json_kind(&other)
                    )));
                }
            };

            serde_json::from_value(inner).map_err(|e| {
                ClientError::InvalidResponse(format!(
                    "{endpoint}: element {index} `{key}` could not be decoded: {e}"
                ))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
