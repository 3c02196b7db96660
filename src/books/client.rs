use anyhow::Result;
use reqwest::{StatusCode, Url};

use super::extract::extract;
use super::outcome::SearchOutcome;
use super::url::volumes_url;
use crate::core::{AppConfig, FetchError};

/// Runs book searches against the volumes API. One HTTP client is
/// built up front and reused for every search.
#[derive(Clone)]
pub struct BooksClient {
    http: reqwest::Client,
    api_base_url: String,
    max_results: u32,
    escape_query: bool,
}

impl BooksClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;
        Ok(Self {
            http,
            api_base_url: config.api_base_url.clone(),
            max_results: config.max_results,
            escape_query: config.escape_query,
        })
    }

    /// Search for `query` and decode the first page of results.
    ///
    /// Never fails loudly. URL and transport problems are logged and
    /// treated as an empty response body, which decodes to `Empty`.
    /// An empty query returns `Empty` without touching the network.
    pub async fn fetch_books(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            tracing::debug!("Skipping search for empty query");
            return SearchOutcome::Empty;
        }

        let url = match volumes_url(&self.api_base_url, query, self.max_results, self.escape_query)
        {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(kind = e.kind(), "{}", e);
                return SearchOutcome::Empty;
            }
        };

        let body = match self.request(url).await {
            Ok(body) => body,
            Err(e) => {
                match &e {
                    FetchError::Status(status) => {
                        tracing::error!(kind = e.kind(), status = *status, "{}", e)
                    }
                    _ => tracing::error!(kind = e.kind(), "{}", e),
                }
                String::new()
            }
        };

        let outcome = extract(&body);
        tracing::debug!(
            query = query,
            count = outcome.books().len(),
            "Search finished"
        );
        outcome
    }

    async fn request(&self, url: Url) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Buffer the whole payload before decoding
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// One-off search using a fresh client built from `config`.
pub async fn fetch_books(config: &AppConfig, query: &str) -> Result<SearchOutcome> {
    let client = BooksClient::new(config)?;
    Ok(client.fetch_books(query).await)
}
