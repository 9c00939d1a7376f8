//! Result helpers for MCP tool responses
//!
//! Tools answer with a single text content block. Structured data is
//! serialized into that block as compact JSON, so clients that only render
//! text still receive something parseable.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::IntoMcpError;

/// Successful response carrying one plain text block
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Successful response carrying `data` as compact JSON text
///
/// Fails only if `data` cannot be serialized.
pub fn json_text_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(data).map_err(IntoMcpError::into_mcp_error)?;
    Ok(text_success(json))
}

/// The text of the first text content block, if any
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        rmcp::model::RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
