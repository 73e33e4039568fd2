//! JSON-RPC 2.0 message types
//!
//! Requests are fully typed. Responses are kept as raw JSON values since the
//! agent's reply is printed verbatim, and only classified for the summary.

use serde::Serialize;
use serde_json::Value;

/// Protocol version sent in every request
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC request envelope
#[derive(Debug, Serialize, PartialEq)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a Value,
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        }
    }
}

/// Shape of a response envelope, as far as the summary cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Object carrying a `result` member
    Result,
    /// Object carrying an `error` member
    Error,
    /// Anything else (not validated further)
    Other,
}

impl ResponseKind {
    pub fn classify(response: &Value) -> Self {
        match response.as_object() {
            Some(obj) if obj.contains_key("error") => ResponseKind::Error,
            Some(obj) if obj.contains_key("result") => ResponseKind::Result,
            _ => ResponseKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_in_envelope_order() {
        let params = json!({ "claim": "x" });
        let request = JsonRpcRequest::new("check_factual_accuracy", &params, 6);
        let text = serde_json::to_string(&request).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","method":"check_factual_accuracy","params":{"claim":"x"},"id":6}"#
        );
    }

    #[test]
    fn classify_result_error_and_other() {
        assert_eq!(
            ResponseKind::classify(&json!({"jsonrpc": "2.0", "result": "ok", "id": 1})),
            ResponseKind::Result
        );
        assert_eq!(
            ResponseKind::classify(&json!({
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found: nope"},
                "id": 2
            })),
            ResponseKind::Error
        );
        assert_eq!(ResponseKind::classify(&json!([1, 2, 3])), ResponseKind::Other);
        assert_eq!(ResponseKind::classify(&json!({"status": "UP"})), ResponseKind::Other);
    }
}
