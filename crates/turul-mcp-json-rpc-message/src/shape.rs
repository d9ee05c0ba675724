//! Structural predicates over decoded values
//!
//! These mirror the field tests of the classifier but skip the `jsonrpc`
//! version check and do not apply the classifier's precedence. Use
//! [`crate::parser::parse`] when strict conformance matters.

use serde_json::Value;

fn has(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|obj| obj.contains_key(key))
}

/// `id` and `method` present
pub fn is_request(value: &Value) -> bool {
    has(value, "id") && has(value, "method")
}

/// `method` present, `id` absent
pub fn is_notification(value: &Value) -> bool {
    has(value, "method") && !has(value, "id")
}

/// `id` and `result` present
pub fn is_response(value: &Value) -> bool {
    has(value, "id") && has(value, "result")
}

/// `id` and `error` present
pub fn is_error(value: &Value) -> bool {
    has(value, "id") && has(value, "error")
}

pub fn is_batch(value: &Value) -> bool {
    value.is_array()
}
