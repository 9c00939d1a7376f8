//! Error handling utilities for MCP servers
//!
//! Conversions from server-side error types into `rmcp::ErrorData`.

use rmcp::ErrorData as McpError;

use crate::args::InvalidArguments;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Trait for converting errors into MCP-compatible errors
///
/// Implement this for a server's own error types to use `?` (through
/// [`ResultExt::to_mcp_err`]) inside tool implementations.
///
/// ```rust,ignore
/// impl IntoMcpError for ConfigError {
///     fn into_mcp_error(self) -> McpError {
///         internal_error(self.to_string())
///     }
/// }
/// ```
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

/// Bad arguments are the caller's fault, so they map to `invalid_params`
impl IntoMcpError for InvalidArguments {
    fn into_mcp_error(self) -> McpError {
        McpError::invalid_params(self.to_string(), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

/// Extension trait giving any `Result<T, E: IntoMcpError>` a `to_mcp_err()`
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid params error with a message
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::FieldError;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err = InvalidArguments::single(FieldError::required("topic")).into_mcp_error();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Invalid arguments: topic: Required");
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("provider unreachable"));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("provider unreachable"));
    }

    #[test]
    fn test_internal_error() {
        let err = internal_error("test");
        assert!(err.message.contains("test"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("bad param");
        assert!(err.message.contains("bad param"));
    }
}
