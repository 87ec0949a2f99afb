//! HTTP exchange with the Last.fm endpoint

use std::time::Duration;

use async_trait::async_trait;
use lastfm_shared_config::LastfmConfig;
use reqwest::Client;
use tracing::debug;

use crate::call_spec::HttpVerb;
use crate::error::LastfmResult;
use crate::request::PreparedRequest;

/// Sends one prepared request and returns the raw response body
///
/// Implementations perform a single exchange: no retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> LastfmResult<String>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    api_url: String,
}

impl HttpTransport {
    /// Build a transport from configuration (endpoint, timeout, user agent)
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(http_client, config.api_url.clone()))
    }

    /// Create a transport with a custom HTTP client
    pub fn with_client(http_client: Client, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> LastfmResult<String> {
        let builder = match request.verb {
            HttpVerb::Get => self.http_client.get(&self.api_url).query(&request.params),
            HttpVerb::Post => self.http_client.post(&self.api_url).form(&request.params),
        };

        let response = builder.send().await?;

        // Failed calls come back as 4xx with an <lfm status="failed"> body,
        // so the status code is left for the error decoder to interpret.
        debug!(
            method = %request.method,
            status = response.status().as_u16(),
            "Last.fm responded"
        );

        Ok(response.text().await?)
    }
}
