//! Serper HTTP client
//!
//! One method per search vertical. Every call POSTs the resolved
//! [`SearchRequest`] as JSON to `<base_url>/<vertical>` with the API key in
//! the `X-API-KEY` header.
//!
//! Calls never return an error: any failure (bad parameters, transport
//! error, non-2xx status, undecodable body) is logged and reported as `None`.
//! See: https://serper.dev

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{ClientOptions, ConfigError, SerperConfig};
use crate::params::{SearchParams, SearchRequest};
use crate::types::{
    ImagesResponse, NewsResponse, PlacesResponse, SearchResponse, ShoppingResponse, Vertical,
    VerticalResponse, VideosResponse,
};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Longest error body excerpt kept for logging
const ERROR_BODY_LIMIT: usize = 200;

/// Why a single request failed. Only ever logged.
#[derive(Error, Debug)]
enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the Serper Google-search API
#[derive(Clone)]
pub struct SerperClient {
    http: Client,
    config: SerperConfig,
}

impl SerperClient {
    /// Build a client; fails if no API key can be resolved
    pub fn new(options: ClientOptions) -> Result<Self, ConfigError> {
        Self::with_config(options.resolve()?)
    }

    /// Build a client purely from `SERPER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientOptions::from_env())
    }

    pub fn with_config(config: SerperConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .user_agent(concat!("serper-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!("Serper client using {}", config.base_url);

        Ok(Self { http, config })
    }

    // ========================================================================
    // Verticals
    // ========================================================================

    /// Web search (organic results, answer box, knowledge graph, ...)
    pub async fn search(&self, params: impl Into<SearchParams>) -> Option<SearchResponse> {
        self.fetch(Vertical::Search, params.into()).await
    }

    pub async fn search_images(&self, params: impl Into<SearchParams>) -> Option<ImagesResponse> {
        self.fetch(Vertical::Images, params.into()).await
    }

    pub async fn search_videos(&self, params: impl Into<SearchParams>) -> Option<VideosResponse> {
        self.fetch(Vertical::Videos, params.into()).await
    }

    pub async fn search_places(&self, params: impl Into<SearchParams>) -> Option<PlacesResponse> {
        self.fetch(Vertical::Places, params.into()).await
    }

    pub async fn search_news(&self, params: impl Into<SearchParams>) -> Option<NewsResponse> {
        self.fetch(Vertical::News, params.into()).await
    }

    /// Shopping search
    pub async fn search_products(
        &self,
        params: impl Into<SearchParams>,
    ) -> Option<ShoppingResponse> {
        self.fetch(Vertical::Shopping, params.into()).await
    }

    /// Search any vertical chosen at runtime
    pub async fn search_vertical(
        &self,
        vertical: Vertical,
        params: impl Into<SearchParams>,
    ) -> Option<VerticalResponse> {
        let params = params.into();
        match vertical {
            Vertical::Search => self.search(params).await.map(VerticalResponse::Search),
            Vertical::Images => self.search_images(params).await.map(VerticalResponse::Images),
            Vertical::Videos => self.search_videos(params).await.map(VerticalResponse::Videos),
            Vertical::Places => self.search_places(params).await.map(VerticalResponse::Places),
            Vertical::News => self.search_news(params).await.map(VerticalResponse::News),
            Vertical::Shopping => self
                .search_products(params)
                .await
                .map(VerticalResponse::Shopping),
        }
    }

    // ========================================================================
    // Transport
    // ========================================================================

    async fn fetch<T: DeserializeOwned>(&self, vertical: Vertical, params: SearchParams) -> Option<T> {
        let request = match params.resolve(&self.config.defaults) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(%vertical, "serper request rejected: {}", e);
                return None;
            }
        };

        tracing::info!(
            %vertical,
            q = %request.q,
            gl = %request.gl,
            hl = %request.hl,
            page = request.page,
            num = request.num,
            autocorrect = request.autocorrect,
            "serper request"
        );

        match self.post(vertical, &request).await {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!(%vertical, "serper fetch failed: {}", e);
                None
            }
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        vertical: Vertical,
        request: &SearchRequest,
    ) -> Result<T, RequestError> {
        let url = self.config.endpoint_url(vertical.endpoint());

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                status,
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
