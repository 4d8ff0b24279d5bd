//! Conversion of ledger outcomes into MCP tool results.
//!
//! Every tool funnels its success payload and its errors through this
//! module, so callers always receive the same shapes:
//!
//! - success: a text item holding the JSON payload, plus the payload as
//!   `structuredContent`
//! - failure: `isError: true` with `{status: "error", kind, message}`

use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use super::error::ToolError;

/// Body of every failed tool call.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// One of `validation_error`, `permission_error`, `storage_error`,
    /// `internal_error`.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
}

impl From<&ToolError> for ErrorResponse {
    fn from(err: &ToolError) -> Self {
        Self {
            status: "error".to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Decode a flat argument map into a tool's parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Build a failed tool result.
pub fn error_result(err: &ToolError) -> CallToolResult {
    warn!("Tool call failed ({}): {}", err.kind(), err);
    let body = ErrorResponse::from(err);
    let text = serde_json::to_string(&body).unwrap_or_else(|_| body.message.clone());

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: serde_json::to_value(&body).ok(),
        is_error: Some(true),
        meta: None,
    }
}

/// Build a successful result whose text is the payload itself.
pub fn structured_result<T: Serialize>(payload: &T) -> CallToolResult {
    build_result(serde_json::to_string(payload), payload)
}

/// Build a successful result whose text is the bare item sequence and whose
/// structured content is the wrapping payload.
pub fn sequence_result<I: Serialize, T: Serialize>(items: &[I], payload: &T) -> CallToolResult {
    build_result(serde_json::to_string(items), payload)
}

fn build_result<T: Serialize>(
    text: serde_json::Result<String>,
    payload: &T,
) -> CallToolResult {
    let rendered = text.and_then(|text| Ok((text, serde_json::to_value(payload)?)));

    match rendered {
        Ok((text, structured)) => CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(&ToolError::internal(format!(
            "Failed to encode result: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ledger::LedgerError;
    use rmcp::model::RawContent;
    use serde::Deserialize;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_error_result_shape() {
        let err = ToolError::from(LedgerError::storage("database is locked"));
        let result = error_result(&err);

        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.clone().unwrap();
        assert_eq!(structured["status"], "error");
        assert_eq!(structured["kind"], "storage_error");
        assert_eq!(structured["message"], "Database error: database is locked");

        let text: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(text, structured);
    }

    #[test]
    fn test_structured_result_shape() {
        let result = structured_result(&serde_json::json!({ "status": "ok", "deleted": 1 }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content.clone().unwrap()["deleted"], 1);
        let text: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(text, serde_json::json!({ "status": "ok", "deleted": 1 }));
    }

    #[test]
    fn test_sequence_result_text_is_bare_array() {
        let items = vec![1, 2, 3];
        let result = sequence_result(&items, &serde_json::json!({ "items": items }));
        assert_eq!(text_of(&result), "[1,2,3]");
        assert_eq!(
            result.structured_content.unwrap(),
            serde_json::json!({ "items": [1, 2, 3] })
        );
    }

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        date: String,
    }

    #[test]
    fn test_parse_arguments_missing_field() {
        let err = parse_arguments::<Sample>(JsonObject::new()).unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().contains("date"));
    }
}
