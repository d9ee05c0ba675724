//! Classification of untrusted JSON-RPC input
//!
//! Input is decoded into a generic [`Value`] and classified purely by which
//! of `id`, `method`, `result` and `error` are present as keys (a key holding
//! `null` counts as present). Arrays are batches; every element is
//! classified on its own and a bad element only invalidates its own slot.
//!
//! Nothing here returns `Err` or panics on bad input: every failure is an
//! [`InvalidReason`] inside the result.

use serde_json::{Map, Value, json};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{AmbiguityPolicy, ParserConfig};
use crate::error::{ErrorData, JsonRpcError, MessageError};
use crate::error_codes;
use crate::message::JsonRpcMessage;
use crate::notification::JsonRpcNotification;
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::types::{JsonRpcVersion, RequestId};

/// Why a payload or batch element could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("Failed to parse JSON")]
    MalformedJson,

    #[error("Invalid or missing jsonrpc version")]
    InvalidVersion,

    #[error("Cannot determine message type")]
    UnknownShape,

    #[error("Ambiguous message: more than one of method, result, error present")]
    Ambiguous,

    #[error("Method must be a string")]
    InvalidMethod,

    #[error("Params must be an object or array")]
    InvalidParams,

    #[error("Error must be an object with integer code and string message")]
    InvalidErrorObject,

    #[error("Empty batch")]
    EmptyBatch,

    #[error("Batch of {len} messages exceeds limit of {max}")]
    BatchTooLarge { len: usize, max: usize },
}

impl InvalidReason {
    /// JSON-RPC error code a server answers this failure with
    pub fn code(&self) -> i64 {
        match self {
            InvalidReason::MalformedJson => error_codes::PARSE_ERROR,
            _ => error_codes::INVALID_REQUEST,
        }
    }

    /// Error payload for answering this failure, the reason text in `data`
    pub fn to_error_data(&self) -> ErrorData {
        ErrorData::from_code(self.code()).with_data(Value::String(self.to_string()))
    }

    /// Error response for this failure; the id is `null` as it is unknown
    pub fn to_error_response(&self) -> JsonRpcError {
        JsonRpcError::new(RequestId::Null, self.to_error_data())
    }
}

/// Tag of a parse result, as rendered in the `type` member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Request,
    Notification,
    Response,
    Error,
    Batch,
    Invalid,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Request => "request",
            MessageType::Notification => "notification",
            MessageType::Response => "response",
            MessageType::Error => "error",
            MessageType::Batch => "batch",
            MessageType::Invalid => "invalid",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single message
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Response(JsonRpcResponse),
    Error(JsonRpcError),
    Invalid(InvalidReason),
}

impl Classified {
    pub fn message_type(&self) -> MessageType {
        match self {
            Classified::Request(_) => MessageType::Request,
            Classified::Notification(_) => MessageType::Notification,
            Classified::Response(_) => MessageType::Response,
            Classified::Error(_) => MessageType::Error,
            Classified::Invalid(_) => MessageType::Invalid,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Classified::Invalid(_))
    }

    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        match self {
            Classified::Invalid(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn into_message(self) -> Result<JsonRpcMessage, InvalidReason> {
        match self {
            Classified::Request(req) => Ok(JsonRpcMessage::Request(req)),
            Classified::Notification(notif) => Ok(JsonRpcMessage::Notification(notif)),
            Classified::Response(resp) => Ok(JsonRpcMessage::Response(resp)),
            Classified::Error(err) => Ok(JsonRpcMessage::Error(err)),
            Classified::Invalid(reason) => Err(reason),
        }
    }

    /// Render as `{"type": ..., "value": ..., "error"?: ...}`
    pub fn to_value(&self) -> Result<Value, MessageError> {
        let value = match self {
            Classified::Request(req) => serde_json::to_value(req),
            Classified::Notification(notif) => serde_json::to_value(notif),
            Classified::Response(resp) => serde_json::to_value(resp),
            Classified::Error(err) => serde_json::to_value(err),
            Classified::Invalid(reason) => {
                return Ok(json!({
                    "type": MessageType::Invalid.as_str(),
                    "value": null,
                    "error": reason.to_string(),
                }));
            }
        }
        .map_err(MessageError::Encode)?;

        Ok(json!({
            "type": self.message_type().as_str(),
            "value": value,
        }))
    }
}

/// Result of [`parse`]
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// A single message, or a failure that applies to the whole payload
    Single(Classified),
    /// One classification per array element, in input order
    Batch(Vec<Classified>),
}

impl ParseResult {
    pub fn message_type(&self) -> MessageType {
        match self {
            ParseResult::Single(classified) => classified.message_type(),
            ParseResult::Batch(_) => MessageType::Batch,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, ParseResult::Batch(_))
    }

    /// True when the payload as a whole was rejected
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParseResult::Single(Classified::Invalid(_)))
    }

    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        match self {
            ParseResult::Single(classified) => classified.invalid_reason(),
            ParseResult::Batch(_) => None,
        }
    }

    /// Single message as a one-element slice, or the batch elements
    pub fn items(&self) -> &[Classified] {
        match self {
            ParseResult::Single(classified) => std::slice::from_ref(classified),
            ParseResult::Batch(items) => items,
        }
    }

    /// Valid messages in input order, invalid entries dropped
    pub fn into_messages(self) -> Vec<JsonRpcMessage> {
        let items = match self {
            ParseResult::Single(classified) => vec![classified],
            ParseResult::Batch(items) => items,
        };
        items
            .into_iter()
            .filter_map(|classified| classified.into_message().ok())
            .collect()
    }

    /// Render as the tagged record, batches as `{"type": "batch", "value": [...]}`
    pub fn to_value(&self) -> Result<Value, MessageError> {
        match self {
            ParseResult::Single(classified) => classified.to_value(),
            ParseResult::Batch(items) => {
                let values = items
                    .iter()
                    .map(Classified::to_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(json!({
                    "type": MessageType::Batch.as_str(),
                    "value": values,
                }))
            }
        }
    }
}

/// Raw text, raw bytes, or an already-decoded value
#[derive(Debug, Clone)]
pub enum ParseInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Value(Cow<'a, Value>),
}

impl<'a> ParseInput<'a> {
    fn decode(self) -> Result<Cow<'a, Value>, serde_json::Error> {
        match self {
            ParseInput::Text(text) => serde_json::from_str(text).map(Cow::Owned),
            ParseInput::Bytes(bytes) => serde_json::from_slice(bytes).map(Cow::Owned),
            ParseInput::Value(value) => Ok(value),
        }
    }
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(text: &'a str) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(text: &'a String) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a [u8]> for ParseInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ParseInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Value> for ParseInput<'a> {
    fn from(value: &'a Value) -> Self {
        ParseInput::Value(Cow::Borrowed(value))
    }
}

impl From<Value> for ParseInput<'_> {
    fn from(value: Value) -> Self {
        ParseInput::Value(Cow::Owned(value))
    }
}

/// Configured message parser
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parser that rejects ambiguous messages and empty batches
    pub fn strict() -> Self {
        Self::new(ParserConfig::strict())
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decode if needed, then classify as a batch or a single message
    pub fn parse<'a>(&self, input: impl Into<ParseInput<'a>>) -> ParseResult {
        let value = match input.into().decode() {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "failed to decode JSON-RPC payload");
                return ParseResult::Single(Classified::Invalid(InvalidReason::MalformedJson));
            }
        };

        match &*value {
            Value::Array(items) => self.parse_batch(items),
            single => ParseResult::Single(self.classify_one(single)),
        }
    }

    fn parse_batch(&self, items: &[Value]) -> ParseResult {
        if items.is_empty() && self.config.reject_empty_batch {
            debug!("rejecting empty JSON-RPC batch");
            return ParseResult::Single(Classified::Invalid(InvalidReason::EmptyBatch));
        }
        if let Some(max) = self.config.max_batch_size.filter(|max| items.len() > *max) {
            debug!(len = items.len(), max, "rejecting oversized JSON-RPC batch");
            return ParseResult::Single(Classified::Invalid(InvalidReason::BatchTooLarge {
                len: items.len(),
                max,
            }));
        }

        trace!(len = items.len(), "classifying JSON-RPC batch");
        ParseResult::Batch(items.iter().map(|item| self.classify_one(item)).collect())
    }

    /// Classify one decoded message
    pub fn classify_one(&self, value: &Value) -> Classified {
        let classified = match value.as_object() {
            Some(obj) if JsonRpcVersion::matches(obj.get("jsonrpc")) => {
                classify_object(obj, self.config.ambiguity)
            }
            _ => Classified::Invalid(InvalidReason::InvalidVersion),
        };

        match &classified {
            Classified::Invalid(reason) => debug!(%reason, "invalid JSON-RPC message"),
            other => trace!(message_type = %other.message_type(), "classified JSON-RPC message"),
        }
        classified
    }
}

fn classify_object(obj: &Map<String, Value>, ambiguity: AmbiguityPolicy) -> Classified {
    let has_id = obj.contains_key("id");
    let has_method = obj.contains_key("method");
    let has_result = obj.contains_key("result");
    let has_error = obj.contains_key("error");

    if ambiguity == AmbiguityPolicy::Reject
        && [has_method, has_result, has_error]
            .into_iter()
            .filter(|present| *present)
            .count()
            > 1
    {
        return Classified::Invalid(InvalidReason::Ambiguous);
    }

    // Ordered: error, response, request, notification
    let classified = match (has_id, has_method, has_result, has_error) {
        (true, _, _, true) => error_data_from(obj.get("error"))
            .map(|error| Classified::Error(JsonRpcError::new(id_of(obj), error))),
        (true, _, true, false) => Ok(Classified::Response(JsonRpcResponse::new(
            id_of(obj),
            obj.get("result").cloned().unwrap_or(Value::Null),
        ))),
        (true, true, false, false) => {
            notification_from(obj).map(|notif| Classified::Request(notif.with_id(id_of(obj))))
        }
        (false, true, _, _) => notification_from(obj).map(Classified::Notification),
        _ => Err(InvalidReason::UnknownShape),
    };

    classified.unwrap_or_else(Classified::Invalid)
}

fn id_of(obj: &Map<String, Value>) -> RequestId {
    obj.get("id")
        .cloned()
        .map(RequestId::from)
        .unwrap_or(RequestId::Null)
}

fn notification_from(obj: &Map<String, Value>) -> Result<JsonRpcNotification, InvalidReason> {
    let method = match obj.get("method") {
        Some(Value::String(method)) => method.clone(),
        _ => return Err(InvalidReason::InvalidMethod),
    };
    let params = match obj.get("params") {
        None | Some(Value::Null) => None,
        Some(params) => Some(
            RequestParams::try_from(params.clone()).map_err(|_| InvalidReason::InvalidParams)?,
        ),
    };
    Ok(JsonRpcNotification::new(method, params))
}

fn error_data_from(value: Option<&Value>) -> Result<ErrorData, InvalidReason> {
    match value {
        Some(error @ Value::Object(_)) => {
            serde_json::from_value(error.clone()).map_err(|_| InvalidReason::InvalidErrorObject)
        }
        _ => Err(InvalidReason::InvalidErrorObject),
    }
}

/// Parse with the default configuration
pub fn parse<'a>(input: impl Into<ParseInput<'a>>) -> ParseResult {
    Parser::default().parse(input)
}

/// Classify one decoded message with the default configuration
pub fn classify_one(value: &Value) -> Classified {
    Parser::default().classify_one(value)
}

/// Response view of `value`: needs `jsonrpc: "2.0"` and a `result` key.
///
/// `id`, `method` and `error` are not consulted for the decision; a missing
/// `id` becomes [`RequestId::Null`].
pub fn parse_response(value: &Value) -> Option<JsonRpcResponse> {
    let obj = value.as_object()?;
    if !JsonRpcVersion::matches(obj.get("jsonrpc")) {
        return None;
    }
    let result = obj.get("result")?;
    Some(JsonRpcResponse::new(id_of(obj), result.clone()))
}

/// Error view of `value`: needs `jsonrpc: "2.0"` and a decodable `error`.
///
/// `id`, `method` and `result` are not consulted for the decision.
pub fn parse_error(value: &Value) -> Option<JsonRpcError> {
    let obj = value.as_object()?;
    if !JsonRpcVersion::matches(obj.get("jsonrpc")) {
        return None;
    }
    let error = error_data_from(Some(obj.get("error")?)).ok()?;
    Some(JsonRpcError::new(id_of(obj), error))
}
