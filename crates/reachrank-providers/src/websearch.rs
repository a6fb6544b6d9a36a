//! Web-search provider client (custom search API shape).

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::types::{SearchHit, WebSearchResults};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/";

/// Client for the web-search API.
pub struct SearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, engine_id: &str, timeout_secs: u64) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, engine_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProviderError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        engine_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("reachrank/0.1 (influence-scoring)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("customsearch/v1"))
            .map_err(|e| ProviderError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            engine_id: engine_id.to_owned(),
            endpoint,
        })
    }

    /// Runs a web search and returns the total result count with top hits.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Api`] if the API returns an error envelope.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, query: &str) -> Result<WebSearchResults, ProviderError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("cx", &self.engine_id);
            pairs.append_pair("q", query);
        }

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if let Some(err) = body.get("error") {
            let msg = err
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            tracing::warn!(query, message = %msg, "search API rejected request");
            return Err(ProviderError::Api(msg));
        }

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
                context: format!("customsearch(q={query})"),
                source: e,
            })?;

        // The API serializes the total as a decimal string.
        let total_results = envelope
            .search_information
            .total_results
            .parse()
            .unwrap_or(0);

        Ok(WebSearchResults {
            total_results,
            items: envelope
                .items
                .into_iter()
                .map(|item| SearchHit {
                    title: item.title,
                    link: item.link,
                })
                .collect(),
        })
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "searchInformation", default)]
    search_information: SearchInformation,
    #[serde(default)]
    items: Vec<SearchResultItem>,
}

#[derive(Deserialize, Default)]
struct SearchInformation {
    #[serde(rename = "totalResults", default)]
    total_results: String,
}

#[derive(Deserialize)]
struct SearchResultItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
}
