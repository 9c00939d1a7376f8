//! MCP Server implementation for Serper web search
//!
//! Exposes a single tool, `web-search`, taking one string argument `topic`.
//! The tool answers with one text block holding either a compact JSON array
//! of `{title, snippet, link}` records or a fixed informational message.

use std::borrow::Cow;

use mcp_common::{
    async_trait, expect_object, json_text_success, text_success, ArgumentReader, EmbeddableError,
    EmbeddableMcp, EmbeddableResult, IntoMcpError, InvalidArguments, McpError, ResultExt,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::SerperClient;
use crate::config::{ClientOptions, ConfigError};
use crate::types::simplify;

pub const SERVER_NAME: &str = "web-search";
pub const WEB_SEARCH_TOOL: &str = "web-search";

/// Returned when the provider call failed for any reason
pub const FAILED_MESSAGE: &str = "Failed to retrieve results";
/// Returned when the provider answered with no organic results
pub const NO_RESULTS_MESSAGE: &str = "No results found";

const INSTRUCTIONS: &str = "Web Search MCP Server - searches the web through the Serper \
                            Google-search API. Call `web-search` with a `topic` to get up to \
                            10 results as a JSON array of {title, snippet, link}.";

/// The Serper web search MCP server
#[derive(Clone)]
pub struct SerperMcpServer {
    options: ClientOptions,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

/// Arguments of the `web-search` tool
///
/// Deserialization goes through [`WebSearchParams::from_arguments`], so a bad
/// argument object reports every failed field, not just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct WebSearchParams {
    pub topic: String,
}

impl WebSearchParams {
    /// Validate a raw tool argument value
    pub fn from_arguments(value: &Value) -> Result<Self, InvalidArguments> {
        Self::from_object(expect_object(value)?)
    }

    fn from_object(object: &JsonObject) -> Result<Self, InvalidArguments> {
        let mut reader = ArgumentReader::new(object);
        let topic = reader.required_str("topic");
        reader.finish()?;

        Ok(Self {
            topic: topic.unwrap_or_default(),
        })
    }
}

impl TryFrom<JsonObject> for WebSearchParams {
    type Error = InvalidArguments;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        Self::from_object(&object)
    }
}

impl JsonSchema for WebSearchParams {
    fn schema_name() -> Cow<'static, str> {
        "WebSearchParams".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic to search the web for"
                }
            },
            "required": ["topic"]
        })
    }
}

impl IntoMcpError for ConfigError {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SerperMcpServer {
    /// Create a server; fails immediately if no API key is resolvable
    pub fn new(options: ClientOptions) -> Result<Self, ConfigError> {
        let config = options.clone().resolve()?;
        tracing::info!("Serper base URL: {}", config.base_url);

        Ok(Self {
            options,
            tool_router: Self::tool_router(),
        })
    }

    /// Create a server configured from `SERPER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientOptions::from_env())
    }

    #[tool(name = "web-search", description = "Search the web for a topic")]
    async fn web_search(
        &self,
        Parameters(params): Parameters<WebSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let client = SerperClient::new(self.options.clone()).to_mcp_err()?;

        tracing::info!("Search for {}", params.topic);

        let Some(response) = client.search(params.topic.as_str()).await else {
            tracing::warn!("{}", FAILED_MESSAGE);
            return Ok(text_success(FAILED_MESSAGE));
        };

        if response.organic.is_empty() {
            tracing::warn!("{}", NO_RESULTS_MESSAGE);
            return Ok(text_success(NO_RESULTS_MESSAGE));
        }

        json_text_success(&simplify(&response.organic))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SerperMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SerperMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            WEB_SEARCH_TOOL => {
                let params = WebSearchParams::from_arguments(&params)?;
                self.web_search(Parameters(params)).await.map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
