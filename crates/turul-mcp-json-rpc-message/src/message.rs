use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{JsonRpcError, MessageError};
use crate::notification::JsonRpcNotification;
use crate::parser::{self, Classified, InvalidReason};
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::types::RequestId;

/// Any single JSON-RPC 2.0 message.
///
/// Serializes to the bare wire shape of the wrapped variant. Decoding goes
/// through the classification algorithm (`TryFrom<Value>` / `FromStr`)
/// rather than an untagged `Deserialize`, so that field presence decides the
/// variant the same way [`parser::parse`] does.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Response(JsonRpcResponse),
    Error(JsonRpcError),
}

impl JsonRpcMessage {
    /// Method name for requests and notifications
    pub fn method(&self) -> Option<&str> {
        match self {
            JsonRpcMessage::Request(req) => Some(&req.method),
            JsonRpcMessage::Notification(notif) => Some(&notif.method),
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => None,
        }
    }

    pub fn params(&self) -> Option<&RequestParams> {
        match self {
            JsonRpcMessage::Request(req) => req.params.as_ref(),
            JsonRpcMessage::Notification(notif) => notif.params.as_ref(),
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => None,
        }
    }

    /// Id of every variant except notifications
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Request(req) => Some(&req.id),
            JsonRpcMessage::Response(resp) => Some(&resp.id),
            JsonRpcMessage::Error(err) => Some(&err.id),
            JsonRpcMessage::Notification(_) => None,
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, JsonRpcMessage::Request(_))
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, JsonRpcMessage::Notification(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, JsonRpcMessage::Response(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcMessage::Error(_))
    }

    pub fn to_value(&self) -> Result<Value, MessageError> {
        serde_json::to_value(self).map_err(MessageError::Encode)
    }

    pub fn to_json_string(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(MessageError::Encode)
    }
}

impl From<JsonRpcRequest> for JsonRpcMessage {
    fn from(request: JsonRpcRequest) -> Self {
        Self::Request(request)
    }
}

impl From<JsonRpcNotification> for JsonRpcMessage {
    fn from(notification: JsonRpcNotification) -> Self {
        Self::Notification(notification)
    }
}

impl From<JsonRpcResponse> for JsonRpcMessage {
    fn from(response: JsonRpcResponse) -> Self {
        Self::Response(response)
    }
}

impl From<JsonRpcError> for JsonRpcMessage {
    fn from(error: JsonRpcError) -> Self {
        Self::Error(error)
    }
}

impl TryFrom<Value> for JsonRpcMessage {
    type Error = InvalidReason;

    fn try_from(value: Value) -> Result<Self, InvalidReason> {
        parser::classify_one(&value).into_message()
    }
}

impl TryFrom<&Value> for JsonRpcMessage {
    type Error = InvalidReason;

    fn try_from(value: &Value) -> Result<Self, InvalidReason> {
        parser::classify_one(value).into_message()
    }
}

impl FromStr for JsonRpcMessage {
    type Err = InvalidReason;

    /// Parse one message; batches are rejected as an unknown shape
    fn from_str(s: &str) -> Result<Self, InvalidReason> {
        match parser::parse(s) {
            parser::ParseResult::Single(classified) => classified.into_message(),
            parser::ParseResult::Batch(_) => Err(InvalidReason::UnknownShape),
        }
    }
}

impl From<JsonRpcMessage> for Classified {
    fn from(message: JsonRpcMessage) -> Self {
        match message {
            JsonRpcMessage::Request(req) => Classified::Request(req),
            JsonRpcMessage::Notification(notif) => Classified::Notification(notif),
            JsonRpcMessage::Response(resp) => Classified::Response(resp),
            JsonRpcMessage::Error(err) => Classified::Error(err),
        }
    }
}
