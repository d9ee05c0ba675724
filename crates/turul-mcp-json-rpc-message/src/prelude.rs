//! # JSON-RPC Message Prelude
//!
//! Re-exports of the most commonly used types and functions.
//!
//! ```rust
//! use turul_mcp_json_rpc_message::prelude::*;
//! ```

pub use crate::config::{AmbiguityPolicy, ParserConfig};
pub use crate::error::{ErrorData, JsonRpcError, MessageError};
pub use crate::factory;
pub use crate::message::JsonRpcMessage;
pub use crate::notification::JsonRpcNotification;
pub use crate::parser::{Classified, InvalidReason, MessageType, ParseResult, Parser, parse};
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::JsonRpcResponse;
pub use crate::types::{JsonRpcVersion, RequestId};

// Error code registry
pub use crate::error_codes::*;
