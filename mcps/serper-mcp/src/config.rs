//! Configuration for serper-mcp
//!
//! Everything comes from explicit options or the process environment:
//! 1. Explicit `ClientOptions` fields
//! 2. `SERPER_API_KEY`, `SERPER_BASE_URL`, `SERPER_GL`, `SERPER_HL`
//! 3. Default values

use thiserror::Error;
use url::Url;

use crate::params::SearchDefaults;

pub const API_KEY_ENV: &str = "SERPER_API_KEY";
pub const BASE_URL_ENV: &str = "SERPER_BASE_URL";
pub const COUNTRY_ENV: &str = "SERPER_GL";
pub const LANGUAGE_ENV: &str = "SERPER_HL";

/// Serper's canonical API endpoint
pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Errors raised while building a client
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SerperClient missing required \"api_key\" (defaults to \"SERPER_API_KEY\" env var)")]
    MissingApiKey,

    #[error("invalid Serper base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client construction options
///
/// Unset fields fall back to the environment, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Parameters applied to every request unless the call overrides them
    pub defaults: SearchDefaults,
}

/// Fully resolved, immutable client configuration
#[derive(Debug, Clone)]
pub struct SerperConfig {
    pub api_key: String,
    pub base_url: Url,
    pub defaults: SearchDefaults,
}

impl ClientOptions {
    /// Options taken entirely from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Options taken from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: non_empty(lookup(API_KEY_ENV)),
            base_url: non_empty(lookup(BASE_URL_ENV)),
            defaults: SearchDefaults {
                gl: non_empty(lookup(COUNTRY_ENV)),
                hl: non_empty(lookup(LANGUAGE_ENV)),
                ..Default::default()
            },
        }
    }

    /// Builder-style API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder-style base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builder-style default parameters
    pub fn with_defaults(mut self, defaults: SearchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolve against the process environment
    pub fn resolve(self) -> Result<SerperConfig, ConfigError> {
        self.resolve_with(env_lookup)
    }

    /// Resolve, filling unset key and base URL from `lookup`
    ///
    /// An empty API key counts as missing.
    pub fn resolve_with(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<SerperConfig, ConfigError> {
        let api_key = non_empty(self.api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or(ConfigError::MissingApiKey)?;

        let raw_url = non_empty(self.base_url)
            .or_else(|| non_empty(lookup(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_url)?;

        Ok(SerperConfig {
            api_key,
            base_url,
            defaults: self.defaults,
        })
    }
}

impl SerperConfig {
    /// `<base_url>/<endpoint>`, tolerating a trailing slash on the base
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
