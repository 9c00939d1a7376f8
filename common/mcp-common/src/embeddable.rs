//! In-process tool invocation
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly with an
//! untyped JSON argument object, bypassing the stdio transport. It is the
//! same request/response shape a `tools/call` carries: tool name plus
//! arguments in, a `CallToolResult` out.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use serper_mcp::SerperMcpServer;
//!
//! let server = SerperMcpServer::from_env()?;
//! let result = server
//!     .call_tool("web-search", serde_json::json!({ "topic": "rust async" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

use crate::args::InvalidArguments;

/// Error type for embedded tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments failed validation
    #[error(transparent)]
    InvalidArguments(#[from] InvalidArguments),

    /// The tool itself reported an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be called in-process
///
/// Servers built on `#[tool_router]` implement this by listing their router
/// and dispatching by name:
///
/// ```rust,ignore
/// #[async_trait]
/// impl EmbeddableMcp for MyServer {
///     fn server_name(&self) -> &str {
///         "my-server"
///     }
///
///     fn list_tools(&self) -> Vec<Tool> {
///         self.tool_router.list_all()
///     }
///
///     async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
///         match name {
///             "my-tool" => self.my_tool(MyParams::from_arguments(&params)?).await.map_err(Into::into),
///             _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used to identify the server in MCP configuration
    fn server_name(&self) -> &str;

    /// All tools with their names, descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Validate `params` and run the tool called `name`
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{expect_object, ArgumentReader};
    use crate::result::text_success;

    struct EchoServer;

    #[async_trait]
    impl EmbeddableMcp for EchoServer {
        fn server_name(&self) -> &str {
            "echo"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
            match name {
                "echo" => {
                    let mut reader = ArgumentReader::new(expect_object(&params)?);
                    let text = reader.required_str("text");
                    reader.finish()?;
                    Ok(text_success(text.unwrap_or_default()))
                }
                _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = EchoServer.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_arguments_propagate() {
        let err = EchoServer
            .call_tool("echo", serde_json::json!({ "text": 7 }))
            .await
            .unwrap_err();

        assert!(matches!(err, EmbeddableError::InvalidArguments(_)));
        assert_eq!(
            err.to_string(),
            "Invalid arguments: text: Expected string, received number"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(EchoServer.server_name(), "echo");
        assert!(EchoServer.server_description().is_none());
        assert!(EchoServer.list_tools().is_empty());
    }
}
