//! Single-shot JSON fetcher for upstream government APIs
//!
//! `UpstreamClient::fetch_json` issues one GET with `Accept: application/json`.
//! Transport errors, non-2xx statuses and unparseable bodies all collapse to
//! `None`; callers cannot tell them apart. There are no retries.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching an upstream resource
///
/// These never leave this module; they exist so failures can be logged.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed or the body was not valid JSON
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    Status(u16),
}

/// Client for fetching JSON documents from upstream APIs
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Creates a new UpstreamClient with transport defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new UpstreamClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and parses a JSON document
    ///
    /// # Returns
    /// * `Some(Value)` - the parsed body of a 2xx response
    /// * `None` - the upstream was unreachable, failed, or sent malformed JSON
    pub async fn fetch_json(&self, url: &str) -> Option<Value> {
        match self.try_fetch(url).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%url, error = %err, "upstream fetch failed");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        tracing::info!(%url, "fetching upstream resource");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
