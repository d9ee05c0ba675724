//! JSON-RPC 2.0 Message Layer Compliance Tests
//!
//! Exercises the public API end to end:
//! - Factory output classifies as the variant it was built as
//! - Text round trips preserve variant and field values
//! - Decision table precedence and failure reporting
//! - Batch order, length and per-element failures

use serde_json::{Value, json};
use std::collections::HashMap;

use turul_mcp_json_rpc_message::{
    Classified, ErrorData, InvalidReason, JsonRpcMessage, MessageType, ParseResult, RequestId,
    RequestParams, classify_one, factory, is_batch, is_error, is_notification, is_request,
    is_response, parse, parse_error, parse_response,
};

fn to_value<T: serde::Serialize>(message: &T) -> Value {
    serde_json::to_value(message).unwrap()
}

fn object_params() -> RequestParams {
    RequestParams::Object(HashMap::from([
        ("name".to_string(), json!("calc")),
        ("args".to_string(), json!({"a": 1, "b": [true, null]})),
    ]))
}

#[cfg(test)]
mod factory_classification {
    use super::*;

    #[test]
    fn test_factory_request_is_request() {
        for params in [None, Some(object_params()), Some(vec![json!(1), json!("x")].into())] {
            let value = to_value(&factory::request("tools/call", params));

            assert!(is_request(&value));
            assert!(!is_notification(&value));
            assert_eq!(classify_one(&value).message_type(), MessageType::Request);
        }
    }

    #[test]
    fn test_factory_notification_is_notification() {
        for params in [None, Some(object_params())] {
            let value = to_value(&factory::notification("notifications/progress", params));

            assert!(is_notification(&value));
            assert!(!is_request(&value));
            assert_eq!(classify_one(&value).message_type(), MessageType::Notification);
        }
    }

    #[test]
    fn test_factory_response_and_error_predicates() {
        let response = to_value(&factory::response(7, json!(null)));
        assert!(is_response(&response));
        assert!(!is_error(&response));

        let error = to_value(&factory::error(7, -32601, "Method not found", None));
        assert!(is_error(&error));
        assert!(!is_response(&error));
    }

    #[test]
    fn test_generated_ids_are_uuid_strings() {
        let first = factory::request("a", None);
        let second = factory::request("a", None);

        assert_ne!(first.id, second.id);
        let id = first.id.as_str().unwrap();
        assert_eq!(uuid::Uuid::parse_str(id).unwrap().get_version_num(), 4);
    }
}

#[cfg(test)]
mod round_trip {
    use super::*;

    fn reparse(message: JsonRpcMessage) -> Classified {
        let text = message.to_json_string().unwrap();
        match parse(text.as_str()) {
            ParseResult::Single(classified) => classified,
            other => panic!("Expected a single message, got: {:?}", other),
        }
    }

    #[test]
    fn test_request_round_trip() {
        let request = factory::request_with_id("req-1", "tools/call", Some(object_params()));
        assert_eq!(reparse(request.clone().into()), Classified::Request(request));
    }

    #[test]
    fn test_notification_round_trip() {
        let notification = factory::notification("initialized", None);
        assert_eq!(
            reparse(notification.clone().into()),
            Classified::Notification(notification)
        );
    }

    #[test]
    fn test_response_round_trip() {
        for result in [json!(null), json!(0), json!({"tools": []}), json!("done")] {
            let response = factory::response(42, result);
            assert_eq!(reparse(response.clone().into()), Classified::Response(response));
        }
    }

    #[test]
    fn test_error_round_trip() {
        for data in [None, Some(json!({"offset": 14})), Some(json!(null))] {
            let error = factory::error(RequestId::Null, -32700, "Parse error", data);
            assert_eq!(reparse(error.clone().into()), Classified::Error(error));
        }
    }

    #[test]
    fn test_message_from_str_round_trip() {
        let message: JsonRpcMessage = factory::request_with_id(3, "ping", None).into();
        let parsed: JsonRpcMessage = message.to_json_string().unwrap().parse().unwrap();
        assert_eq!(parsed, message);
    }
}

#[cfg(test)]
mod classification {
    use super::*;

    #[test]
    fn test_malformed_json() {
        let result = parse("not valid json{");
        assert_eq!(result.message_type(), MessageType::Invalid);
        assert_eq!(
            result.to_value().unwrap(),
            json!({"type": "invalid", "value": null, "error": "Failed to parse JSON"})
        );
    }

    #[test]
    fn test_wrong_version() {
        let result = parse(r#"{"jsonrpc":"1.0","method":"x"}"#);
        assert_eq!(
            result.to_value().unwrap()["error"],
            json!("Invalid or missing jsonrpc version")
        );
    }

    #[test]
    fn test_error_precedes_result() {
        let result =
            parse(r#"{"jsonrpc":"2.0","id":1,"result":5,"error":{"code":-1,"message":"x"}}"#);
        match result {
            ParseResult::Single(Classified::Error(err)) => {
                assert_eq!(err.id, RequestId::Number(1));
                assert_eq!(err.error, ErrorData::new(-1, "x", None));
            }
            other => panic!("Expected error, got: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_shape() {
        let result = parse(r#"{"jsonrpc":"2.0","params":[1]}"#);
        assert_eq!(result.invalid_reason(), Some(&InvalidReason::UnknownShape));
        assert_eq!(
            result.to_value().unwrap()["error"],
            json!("Cannot determine message type")
        );
    }

    #[test]
    fn test_decoded_null_is_not_a_decode_failure() {
        let result = parse("null");
        assert_eq!(result.invalid_reason(), Some(&InvalidReason::InvalidVersion));
    }

    #[test]
    fn test_parse_twice_gives_equal_results() {
        let inputs = [
            r#"{"jsonrpc":"2.0","id":1,"method":"a","params":{"x":[1,2]}}"#,
            r#"[{"jsonrpc":"2.0","method":"a"},{"broken":true},{"jsonrpc":"2.0","id":"z","result":{}}]"#,
            "{{{",
        ];
        for input in inputs {
            assert_eq!(parse(input), parse(input));
            assert_eq!(parse(input).to_value().unwrap(), parse(input).to_value().unwrap());
        }
    }

    #[test]
    fn test_narrow_parsers() {
        let both = json!({
            "jsonrpc": "2.0",
            "id": 4,
            "result": "ok",
            "error": {"code": -32603, "message": "Internal error"}
        });

        assert_eq!(parse_response(&both).unwrap().result, json!("ok"));
        assert_eq!(parse_error(&both).unwrap().error, ErrorData::internal_error(None));
        assert_eq!(classify_one(&both).message_type(), MessageType::Error);
    }
}

#[cfg(test)]
mod batches {
    use super::*;

    #[test]
    fn test_batch_order_and_length() {
        let result = parse(r#"[{"jsonrpc":"2.0","method":"a"},{"jsonrpc":"2.0","id":1,"method":"b"}]"#);

        assert_eq!(result.message_type(), MessageType::Batch);
        let value = result.to_value().unwrap();
        assert_eq!(value["type"], json!("batch"));
        assert_eq!(value["value"].as_array().unwrap().len(), 2);
        assert_eq!(value["value"][0]["type"], json!("notification"));
        assert_eq!(value["value"][0]["value"]["method"], json!("a"));
        assert_eq!(value["value"][1]["type"], json!("request"));
        assert_eq!(value["value"][1]["value"]["id"], json!(1));
    }

    #[test]
    fn test_one_bad_element_does_not_spoil_the_batch() {
        let mut items: Vec<Value> = (0..10)
            .map(|i| json!({"jsonrpc": "2.0", "id": i, "method": "work"}))
            .collect();
        items[4] = json!({"jsonrpc": "2.0", "id": 4});

        let result = parse(Value::Array(items));
        let reasons: Vec<_> = result.items().iter().map(Classified::invalid_reason).collect();

        assert_eq!(reasons.len(), 10);
        assert_eq!(reasons[4], Some(&InvalidReason::UnknownShape));
        assert_eq!(reasons.iter().filter(|reason| reason.is_none()).count(), 9);
        assert_eq!(result.into_messages().len(), 9);
    }

    #[test]
    fn test_batch_from_factory_messages() {
        let messages: Vec<JsonRpcMessage> = vec![
            factory::request_with_id(1, "a", None).into(),
            factory::notification("b", None).into(),
            factory::response(2, json!([])).into(),
            factory::error(3, -32602, "Invalid params", None).into(),
        ];
        let text = serde_json::to_string(&messages).unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(is_batch(&value));

        let parsed = parse(text.as_str()).into_messages();
        assert_eq!(parsed, messages);
    }
}
