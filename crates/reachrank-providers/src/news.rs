//! News mention provider client.

use std::time::Duration;

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::types::NewsMentions;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Client for the news mention API (`/v2/everything` shape).
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("reachrank/0.1 (influence-scoring)")
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the mention count and headlines for a query, optionally
    /// restricted to articles published after `since`.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Api`] if the API returns an error envelope.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn mentions(
        &self,
        query: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<NewsMentions, ProviderError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        let mut url = format!(
            "{}/v2/everything?q={encoded}&apiKey={}",
            self.base_url, self.api_key
        );
        if let Some(since) = since {
            url.push_str(&format!("&from={}", since.format("%Y-%m-%dT%H:%M:%SZ")));
        }

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("everything(q={query})"),
                source: e,
            })?;

        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            tracing::warn!(query, message = %msg, "news API rejected request");
            return Err(ProviderError::Api(msg));
        }

        let envelope: NewsEnvelope =
            serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
                context: format!("everything(q={query})"),
                source: e,
            })?;

        Ok(NewsMentions {
            total_results: envelope.total_results,
            headlines: envelope
                .articles
                .into_iter()
                .map(|article| article.title)
                .collect(),
        })
    }
}

#[derive(Deserialize)]
struct NewsEnvelope {
    #[serde(rename = "totalResults", default)]
    total_results: u64,
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

#[derive(Deserialize)]
struct NewsArticle {
    #[serde(default)]
    title: String,
}
