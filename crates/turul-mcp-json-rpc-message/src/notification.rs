use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::{JsonRpcRequest, RequestParams};
use crate::types::{JsonRpcVersion, RequestId};

/// A JSON-RPC notification (request without an id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcNotification {
    pub fn new(method: String, params: Option<RequestParams>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method,
            params,
        }
    }

    /// Turn this notification into a request carrying `id`.
    ///
    /// The id is taken as given; no type or uniqueness check is made.
    pub fn with_id(self, id: RequestId) -> JsonRpcRequest {
        JsonRpcRequest {
            version: self.version,
            id,
            method: self.method,
            params: self.params,
        }
    }

    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    pub fn get_param_index(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_string};
    use std::collections::HashMap;

    #[test]
    fn test_notification_serialization() {
        let notification = JsonRpcNotification::new("test_notification".to_string(), None);

        let json_str = to_string(&notification).unwrap();
        let parsed: JsonRpcNotification = from_str(&json_str).unwrap();

        assert_eq!(parsed.method, "test_notification");
        assert!(parsed.params.is_none());
    }

    #[test]
    fn test_notification_with_params() {
        let mut params = HashMap::new();
        params.insert("message".to_string(), json!("Hello"));
        params.insert("level".to_string(), json!("info"));

        let notification = JsonRpcNotification::new("log".to_string(), Some(params.into()));

        assert_eq!(notification.get_param("message"), Some(&json!("Hello")));
        assert_eq!(notification.get_param("level"), Some(&json!("info")));
    }

    #[test]
    fn test_notification_json_format() {
        let notification = JsonRpcNotification::new("ping".to_string(), None);
        let json_str = to_string(&notification).unwrap();

        assert!(!json_str.contains("\"id\""));
        assert!(json_str.contains("\"jsonrpc\":\"2.0\""));
        assert!(json_str.contains("\"method\":\"ping\""));
    }

    #[test]
    fn test_with_id_keeps_method_and_params() {
        let notification = JsonRpcNotification::new(
            "sum".to_string(),
            Some(RequestParams::Array(vec![json!(1), json!(2)])),
        );

        let request = notification.clone().with_id(RequestId::Other(json!([1])));

        assert_eq!(request.method, notification.method);
        assert_eq!(request.params, notification.params);
        assert_eq!(request.id, RequestId::Other(json!([1])));
    }
}
