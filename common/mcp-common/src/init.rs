//! Server initialization utilities
//!
//! Tracing setup plus the `serve_stdio!` macro used by every stdio server's
//! `main.rs`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line format, chosen by `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON, anything else falls back to text
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// Initialize tracing for an MCP server
///
/// Logs always go to stderr: stdout carries the MCP protocol. The filter is
/// taken from `RUST_LOG` with `<crate_name>=info` added on top, and
/// `LOG_FORMAT=json` switches to structured JSON lines.
///
/// ```rust,ignore
/// mcp_common::init_tracing("serper_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

/// Standard `main` for a stdio MCP server
///
/// Takes a fallible constructor so servers can refuse to start when their
/// required configuration is missing. The constructor must return
/// `Result<Server, E>` where `E` converts into `anyhow::Error`.
///
/// ```rust,ignore
/// mod server;
/// use server::SerperMcpServer;
///
/// mcp_common::serve_stdio!(SerperMcpServer::from_env, "serper_mcp");
/// ```
///
/// Expands to a `#[tokio::main] async fn main()` that initializes tracing,
/// builds the server (exiting with the constructor's error on failure),
/// serves it over stdin/stdout and waits for the client to disconnect.
#[macro_export]
macro_rules! serve_stdio {
    ($constructor:path, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $constructor()?;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Text);
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
    }
}
