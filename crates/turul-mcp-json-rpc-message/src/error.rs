use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::error_codes;
use crate::types::{JsonRpcVersion, RequestId};

/// The `error` member of a JSON-RPC error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorData {
    pub code: i64,
    pub message: String,
    /// `Some(Value::Null)` when the member is present as `null`
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,
}

/// Keeps a present member as `Some`, even when its value is `null`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ErrorData {
    pub fn new(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Error with the registry description as its message
    pub fn from_code(code: i64) -> Self {
        Self::new(code, error_codes::error_description(code), None)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn parse_error() -> Self {
        Self::from_code(error_codes::PARSE_ERROR)
    }

    pub fn invalid_request() -> Self {
        Self::from_code(error_codes::INVALID_REQUEST)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method '{}' not found", method),
            None,
        )
    }

    pub fn invalid_params(message: &str) -> Self {
        Self::new(error_codes::INVALID_PARAMS, message, None)
    }

    pub fn internal_error(message: Option<String>) -> Self {
        match message {
            Some(message) => Self::new(error_codes::INTERNAL_ERROR, message, None),
            None => Self::from_code(error_codes::INTERNAL_ERROR),
        }
    }

    pub fn is_standard(&self) -> bool {
        error_codes::is_standard_error(self.code)
    }

    /// Registry description of this error's code
    pub fn description(&self) -> String {
        error_codes::error_description(self.code)
    }
}

impl fmt::Display for ErrorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// JSON-RPC error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub error: ErrorData,
}

impl JsonRpcError {
    pub fn new(id: RequestId, error: ErrorData) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            error,
        }
    }

    /// Parse errors happen before the id is known, so the id is `null`
    pub fn parse_error() -> Self {
        Self::new(RequestId::Null, ErrorData::parse_error())
    }

    pub fn invalid_request(id: RequestId) -> Self {
        Self::new(id, ErrorData::invalid_request())
    }

    pub fn method_not_found(id: RequestId, method: &str) -> Self {
        Self::new(id, ErrorData::method_not_found(method))
    }

    pub fn invalid_params(id: RequestId, message: &str) -> Self {
        Self::new(id, ErrorData::invalid_params(message))
    }

    pub fn internal_error(id: RequestId, message: Option<String>) -> Self {
        Self::new(id, ErrorData::internal_error(message))
    }

    pub fn code(&self) -> i64 {
        self.error.code
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JSON-RPC Error {}: {}",
            self.error.code, self.error.message
        )
    }
}

impl std::error::Error for JsonRpcError {}

/// Failures of the typed conversions around the parser.
///
/// Classification itself never fails this way; it reports
/// [`InvalidReason`](crate::parser::InvalidReason) values instead.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Params must be an object or array, got {found}")]
    ParamsShape { found: &'static str },
}

/// Name of a JSON value's type, for diagnostics
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
