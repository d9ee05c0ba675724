//! Constructors for outgoing messages
//!
//! Nothing is validated here; these build trusted output. Validation of
//! untrusted input belongs to [`crate::parser`].

use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use crate::error::{ErrorData, JsonRpcError};
use crate::notification::JsonRpcNotification;
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::types::RequestId;

/// Fresh random (UUID v4) string id.
///
/// Ids come from random entropy rather than a shared counter, so concurrent
/// callers never need to coordinate. Keeping ids unique across a connection
/// remains the caller's concern.
pub fn generate_request_id() -> RequestId {
    let id = RequestId::String(Uuid::new_v4().to_string());
    trace!(%id, "generated request id");
    id
}

/// Request with a generated id
pub fn request(method: impl Into<String>, params: Option<RequestParams>) -> JsonRpcRequest {
    request_with_id(generate_request_id(), method, params)
}

/// Request with a caller-assigned id
pub fn request_with_id(
    id: impl Into<RequestId>,
    method: impl Into<String>,
    params: Option<RequestParams>,
) -> JsonRpcRequest {
    JsonRpcRequest::new(id.into(), method.into(), params)
}

pub fn notification(
    method: impl Into<String>,
    params: Option<RequestParams>,
) -> JsonRpcNotification {
    JsonRpcNotification::new(method.into(), params)
}

/// Success response echoing `id`; `result` may be `null`
pub fn response(id: impl Into<RequestId>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse::new(id.into(), result)
}

pub fn error(
    id: impl Into<RequestId>,
    code: i64,
    message: impl Into<String>,
    data: Option<Value>,
) -> JsonRpcError {
    JsonRpcError::new(id.into(), error_data(code, message, data))
}

pub fn error_data(code: i64, message: impl Into<String>, data: Option<Value>) -> ErrorData {
    ErrorData::new(code, message, data)
}
