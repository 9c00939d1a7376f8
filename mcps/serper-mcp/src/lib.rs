//! Serper Web Search MCP Library
//!
//! Web search through the Serper Google-search API, exposed as a single MCP
//! tool (`web-search`).
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use serper_mcp::{SerperClient, SearchParams};
//!
//! let client = SerperClient::from_env()?;
//! if let Some(news) = client.search_news(SearchParams::new("rust 2024").num(5)).await {
//!     println!("{} stories", news.news.len());
//! }
//! ```
//!
//! # Configuration
//! Set `SERPER_API_KEY` (required). Optional: `SERPER_BASE_URL`, `SERPER_GL`,
//! `SERPER_HL`.

pub mod client;
pub mod config;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::{SerperMcpServer, WebSearchParams};

pub use client::SerperClient;
pub use config::{ClientOptions, ConfigError, SerperConfig};
pub use params::{SearchDefaults, SearchParams, SearchRequest};
pub use types::{SimplifiedResult, Vertical, VerticalResponse};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
