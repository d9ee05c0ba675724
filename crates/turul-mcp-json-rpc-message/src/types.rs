use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier carried by requests, responses and error responses.
///
/// Well-formed ids are strings or integers. `Null` is only meaningful on an
/// error response for a request whose id could not be determined. Whatever
/// else a peer puts under `id` (floats, objects, arrays) is kept verbatim in
/// `Other` so that parsing never loses information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
    Null,
    Other(Value),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "{}", s),
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::Null => write!(f, "null"),
            RequestId::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<i32> for RequestId {
    fn from(n: i32) -> Self {
        RequestId::Number(n.into())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

impl From<Value> for RequestId {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RequestId::Null,
            Value::String(s) => RequestId::String(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RequestId::Number(i),
                None => RequestId::Other(Value::Number(n)),
            },
            other => RequestId::Other(other),
        }
    }
}

impl From<RequestId> for Value {
    fn from(id: RequestId) -> Self {
        match id {
            RequestId::Number(n) => Value::from(n),
            RequestId::String(s) => Value::String(s),
            RequestId::Null => Value::Null,
            RequestId::Other(value) => value,
        }
    }
}

impl RequestId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RequestId::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RequestId::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RequestId::Null)
    }

    /// True for the string and integer ids JSON-RPC 2.0 recommends
    pub fn is_conventional(&self) -> bool {
        matches!(self, RequestId::Number(_) | RequestId::String(_))
    }
}

/// JSON-RPC version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonRpcVersion {
    #[default]
    V2_0,
}

impl JsonRpcVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonRpcVersion::V2_0 => crate::JSONRPC_VERSION,
        }
    }

    /// Check the `jsonrpc` member of a decoded message
    pub fn matches(value: Option<&Value>) -> bool {
        matches!(value, Some(Value::String(s)) if s == crate::JSONRPC_VERSION)
    }
}

impl fmt::Display for JsonRpcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for JsonRpcVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JsonRpcVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            crate::JSONRPC_VERSION => Ok(JsonRpcVersion::V2_0),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid JSON-RPC version: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_id_serialization() {
        let id_str = RequestId::String("test".to_string());
        let id_num = RequestId::Number(42);

        assert_eq!(serde_json::to_string(&id_str).unwrap(), r#""test""#);
        assert_eq!(serde_json::to_string(&id_num).unwrap(), "42");
        assert_eq!(serde_json::to_string(&RequestId::Null).unwrap(), "null");
    }

    #[test]
    fn test_request_id_from_value_keeps_unusual_ids() {
        assert_eq!(RequestId::from(json!(7)), RequestId::Number(7));
        assert_eq!(RequestId::from(json!("a")), RequestId::from("a"));
        assert_eq!(RequestId::from(json!(null)), RequestId::Null);

        let float = RequestId::from(json!(1.5));
        assert_eq!(float, RequestId::Other(json!(1.5)));
        assert!(!float.is_conventional());
        assert_eq!(Value::from(float), json!(1.5));

        let object = RequestId::from(json!({"nested": true}));
        assert_eq!(serde_json::to_value(&object).unwrap(), json!({"nested": true}));
    }

    #[test]
    fn test_request_id_deserialization() {
        let id: RequestId = serde_json::from_str("12").unwrap();
        assert_eq!(id.as_i64(), Some(12));

        let id: RequestId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.as_str(), Some("abc"));

        let id: RequestId = serde_json::from_str("null").unwrap();
        assert!(id.is_null());
    }

    #[test]
    fn test_json_rpc_version() {
        let version = JsonRpcVersion::V2_0;
        assert_eq!(version.as_str(), "2.0");
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""2.0""#);
        assert!(serde_json::from_str::<JsonRpcVersion>(r#""1.0""#).is_err());
    }

    #[test]
    fn test_version_matches_only_exact_string() {
        assert!(JsonRpcVersion::matches(Some(&json!("2.0"))));
        assert!(!JsonRpcVersion::matches(Some(&json!("1.0"))));
        assert!(!JsonRpcVersion::matches(Some(&json!(2.0))));
        assert!(!JsonRpcVersion::matches(None));
    }
}
