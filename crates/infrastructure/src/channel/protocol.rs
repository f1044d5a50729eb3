//! Wire codec for the control channel.
//!
//! Request: a single JSON object `{"command": ..., "arguments"?: ...}`, no
//! framing beyond EOF. Response: a JSON array with exactly one object
//! carrying a `result` code plus `arguments` (success) or `text` (failure).

use kea_bridge_domain::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct CommandEnvelope<'a> {
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    arguments: Option<&'a Value>,
}

#[derive(Deserialize)]
struct ControlResponse {
    result: i64,
    #[serde(default)]
    arguments: Option<Value>,
    #[serde(default)]
    text: Option<String>,
}

pub fn encode_command(command: &str, arguments: Option<&Value>) -> Result<Vec<u8>, BridgeError> {
    serde_json::to_vec(&CommandEnvelope { command, arguments })
        .map_err(|e| BridgeError::Protocol(format!("failed to encode command: {e}")))
}

/// Decode a raw response. `result == 0` yields the `arguments` payload
/// (an empty object when the server sent none); a non-zero result is a
/// well-formed rejection carrying the server's `text`.
pub fn parse_response(raw: &[u8]) -> Result<Value, BridgeError> {
    let responses: Vec<ControlResponse> = serde_json::from_slice(raw)
        .map_err(|e| BridgeError::Protocol(format!("invalid JSON response: {e}")))?;

    let response = responses
        .into_iter()
        .next()
        .ok_or_else(|| BridgeError::Protocol("empty response array".to_string()))?;

    if response.result == 0 {
        Ok(response
            .arguments
            .unwrap_or_else(|| Value::Object(Default::default())))
    } else {
        Err(BridgeError::CommandRejected(
            response.text.unwrap_or_else(|| {
                format!("command failed with result {}", response.result)
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_command_without_arguments() {
        let raw = encode_command("status-get", None).unwrap();
        let value: Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value, json!({ "command": "status-get" }));
    }

    #[test]
    fn encodes_command_with_arguments() {
        let args = json!({ "Dhcp4": { "subnet4": [] } });
        let raw = encode_command("config-set", Some(&args)).unwrap();
        let value: Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value["command"], "config-set");
        assert_eq!(value["arguments"], args);
    }

    #[test]
    fn success_yields_arguments_payload() {
        let payload = parse_response(br#"[{"result":0,"arguments":{"pid":42}}]"#).unwrap();
        assert_eq!(payload["pid"], 42);
    }

    #[test]
    fn success_without_arguments_yields_empty_object() {
        let payload = parse_response(br#"[{"result":0,"text":"ok"}]"#).unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn rejection_carries_server_text() {
        let err = parse_response(br#"[{"result":1,"text":"no such subnet"}]"#).unwrap_err();
        match err {
            BridgeError::CommandRejected(text) => assert_eq!(text, "no such subnet"),
            other => panic!("expected CommandRejected, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_protocol_error() {
        let err = parse_response(b"not json at all").unwrap_err();
        assert!(matches!(err, BridgeError::Protocol(_)));
    }

    #[test]
    fn empty_array_is_a_protocol_error() {
        let err = parse_response(b"[]").unwrap_err();
        assert!(matches!(err, BridgeError::Protocol(_)));
    }
}
