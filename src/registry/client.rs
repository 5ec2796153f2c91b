//! HTTP client for the registry search endpoint.

use reqwest::{Client, Url};
use std::future::Future;
use std::time::{Duration, Instant};

use crate::config::RegistryConfig;

use super::error::SearchError;
use super::types::SearchResponse;

/// Path of the search endpoint, relative to the registry root.
const SEARCH_PATH: &str = "/-/v1/search";

/// Anything that can turn a search term into a list of package names.
///
/// The dispatcher only talks to this trait, so the UI and tests can run
/// against an in-process backend.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<String>, SearchError>> + Send;
}

/// Client for a package registry.
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Build a client from the registry section of the config.
    ///
    /// No timeout is applied unless `timeout_seconds` is set.
    pub fn new(config: &RegistryConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(SearchError::from)?;

        let client = Self {
            client,
            base_url: config.base_url.clone(),
        };
        // Surface a bad base URL at startup rather than on first submit.
        client.search_url("")?;
        Ok(client)
    }

    /// Build `<base>/-/v1/search?text=<term>`.
    pub fn search_url(&self, term: &str) -> Result<Url, SearchError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        let mut url = Url::parse(&raw).map_err(|e| SearchError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("text", term);
        Ok(url)
    }
}

impl SearchBackend for RegistryClient {
    async fn search(&self, term: &str) -> Result<Vec<String>, SearchError> {
        let url = self.search_url(term)?;

        tracing::debug!(url = %url, "Sending registry search request");

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "Registry search returned an error status");
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let names = parsed.into_names();

        tracing::debug!(latency_ms, results = names.len(), "Registry search completed");
        Ok(names)
    }
}
