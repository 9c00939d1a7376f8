//! Serper Web Search MCP Server
//!
//! Serves the `web-search` tool over stdio. Refuses to start without
//! `SERPER_API_KEY`.
//!
//! Configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "web-search": { "command": "./serper-mcp", "env": { "SERPER_API_KEY": "..." } } } }
//! ```

use serper_mcp::SerperMcpServer;

mcp_common::serve_stdio!(SerperMcpServer::from_env, "serper_mcp");
