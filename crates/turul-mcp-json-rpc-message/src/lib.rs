//! # JSON-RPC 2.0 Message Layer
//!
//! Transport-agnostic construction, classification and parsing of JSON-RPC
//! 2.0 messages: requests, notifications, responses, error responses and
//! batches. There is no dispatch and no I/O here; callers feed in text or
//! decoded JSON and get typed messages back.
//!
//! ## Features
//! - Factory functions for every message shape, with UUID request ids
//! - Classification by field presence, batches element by element
//! - Parse failures reported as data, never as panics or `Err`
//! - Registry of standard and SDK error codes
//!
//! ```rust
//! use turul_mcp_json_rpc_message::{factory, parse, MessageType};
//!
//! let request = factory::request_with_id(1, "tools/list", None);
//! let text = serde_json::to_string(&request).unwrap();
//!
//! assert_eq!(parse(text.as_str()).message_type(), MessageType::Request);
//! ```

pub mod config;
pub mod error;
pub mod error_codes;
pub mod factory;
pub mod message;
pub mod notification;
pub mod parser;
pub mod prelude;
pub mod request;
pub mod response;
pub mod shape;
pub mod types;

// Re-export main types
pub use config::{AmbiguityPolicy, ParserConfig};
pub use error::{ErrorData, JsonRpcError, MessageError};
pub use error_codes::{error_description, is_standard_error};
pub use message::JsonRpcMessage;
pub use notification::JsonRpcNotification;
pub use parser::{
    Classified, InvalidReason, MessageType, ParseInput, ParseResult, Parser, classify_one, parse,
    parse_error, parse_response,
};
pub use request::{JsonRpcRequest, RequestParams};
pub use response::JsonRpcResponse;
pub use shape::{is_batch, is_error, is_notification, is_request, is_response};
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";
