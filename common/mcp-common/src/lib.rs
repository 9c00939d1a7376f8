//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: `init_tracing` and the `serve_stdio!` macro
//! - **Arguments**: field-by-field validation of untyped tool arguments
//! - **Results**: helpers for single-text-block `CallToolResult`s
//! - **Errors**: conversions into `rmcp::ErrorData`
//! - **Embeddable**: [`EmbeddableMcp`] for in-process tool calls
//!
//! # Example
//!
//! ```rust,ignore
//! // main.rs
//! mcp_common::serve_stdio!(MyServer::from_env, "my_mcp");
//!
//! // a tool
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     json_text_success(&self.collect())
//! }
//! ```

pub mod args;
pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use args::{expect_object, ArgumentReader, FieldError, InvalidArguments};
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat};
pub use result::{first_text, json_text_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
