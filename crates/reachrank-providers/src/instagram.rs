//! Photo/video-platform profile client (RapidAPI scraper shape).

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::types::InstagramProfile;

const DEFAULT_BASE_URL: &str = "https://instagram-scraper-api.p.rapidapi.com/";
const DEFAULT_API_HOST: &str = "instagram-scraper-api.p.rapidapi.com";

/// Client for the Instagram scraper API.
///
/// Authenticates with `X-RapidAPI-Key` / `X-RapidAPI-Host` headers rather
/// than query parameters.
pub struct InstagramClient {
    client: Client,
    api_key: String,
    api_host: String,
    endpoint: Url,
}

impl InstagramClient {
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
    /// cannot be constructed, or [`ProviderError::Api`] if `base_url` is not
    /// a valid URL.
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

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("reels"))
            .map_err(|e| ProviderError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            api_host: DEFAULT_API_HOST.to_owned(),
            endpoint,
        })
    }

    /// Fetches the account profile for a username.
    ///
    /// Account age falls back from the API's own `account_age` field to the
    /// years elapsed since `created_at`, then to zero.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Api`] if the API returns an error envelope or no
    ///   user block.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_profile(&self, username: &str) -> Result<InstagramProfile, ProviderError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("user_id", username);
            pairs.append_pair("include_feed_video", "true");
        }

        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("reels(user_id={username})"),
                source: e,
            })?;

        if let Some(err) = body.get("error").and_then(serde_json::Value::as_str) {
            tracing::warn!(username, message = err, "scraper API rejected request");
            return Err(ProviderError::Api(err.to_owned()));
        }

        let envelope: ReelsEnvelope =
            serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
                context: format!("reels(user_id={username})"),
                source: e,
            })?;
        let user = envelope.user.ok_or_else(|| {
            tracing::warn!(username, "scraper API returned no user block");
            ProviderError::Api(format!("no profile for '{username}'"))
        })?;

        let account_age_years = user
            .account_age
            .or_else(|| {
                user.created_at.map(|created| {
                    let years = Utc::now().year() - created.year();
                    u32::try_from(years.max(0)).unwrap_or(0)
                })
            })
            .unwrap_or(0);

        Ok(InstagramProfile {
            full_name: user.full_name.unwrap_or_else(|| username.to_owned()),
            avatar_url: user.profile_pic_url.unwrap_or_default(),
            follower_count: user.follower_count.unwrap_or(0),
            account_age_years,
            total_views: envelope.total_views.unwrap_or(0),
            biography: user.biography.unwrap_or_default(),
            verified: user.is_verified.unwrap_or(false),
        })
    }
}

#[derive(Deserialize)]
struct ReelsEnvelope {
    user: Option<ReelsUser>,
    total_views: Option<u64>,
}

#[derive(Deserialize)]
struct ReelsUser {
    full_name: Option<String>,
    profile_pic_url: Option<String>,
    follower_count: Option<u64>,
    account_age: Option<u32>,
    created_at: Option<DateTime<Utc>>,
    biography: Option<String>,
    is_verified: Option<bool>,
}
