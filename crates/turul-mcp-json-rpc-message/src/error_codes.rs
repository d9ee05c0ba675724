//! Registered JSON-RPC error codes
//!
//! The five protocol codes from JSON-RPC 2.0 plus the SDK-level codes used by
//! MCP transports. The table is plain constant data; lookups are free
//! functions.

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

// SDK extensions, outside the checked standard range
pub const CONNECTION_CLOSED: i64 = -32000;
pub const REQUEST_TIMEOUT: i64 = -32001;
pub const URL_ELICITATION_REQUIRED: i64 = -32042;

/// Lower bound of the range reported by [`is_standard_error`]
pub const STANDARD_ERROR_START: i64 = -32699;
/// Upper bound of the range reported by [`is_standard_error`]
pub const STANDARD_ERROR_END: i64 = -32600;

/// Every registered code with its description
pub const REGISTERED: [(i64, &str); 8] = [
    (PARSE_ERROR, "Parse error"),
    (INVALID_REQUEST, "Invalid Request"),
    (METHOD_NOT_FOUND, "Method not found"),
    (INVALID_PARAMS, "Invalid params"),
    (INTERNAL_ERROR, "Internal error"),
    (CONNECTION_CLOSED, "Connection closed"),
    (REQUEST_TIMEOUT, "Request timeout"),
    (URL_ELICITATION_REQUIRED, "URL elicitation required"),
];

/// True iff `code` lies in `-32699..=-32600`.
///
/// `PARSE_ERROR` and the SDK codes are registered but fall outside this
/// range, so they report `false`.
pub fn is_standard_error(code: i64) -> bool {
    (STANDARD_ERROR_START..=STANDARD_ERROR_END).contains(&code)
}

/// Description of a registered code, by exact value
pub fn registered_description(code: i64) -> Option<&'static str> {
    REGISTERED
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, description)| *description)
}

/// Human-readable description of `code`.
///
/// Unregistered codes get `"Unknown error (code: <code>)"`, even when they
/// sit inside the standard range.
pub fn error_description(code: i64) -> String {
    match registered_description(code) {
        Some(description) => description.to_string(),
        None => format!("Unknown error (code: {})", code),
    }
}
