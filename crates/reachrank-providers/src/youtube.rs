//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. Count fields arrive as JSON strings and are parsed
//! leniently to zero; the API's `{"error": {...}}` envelope is surfaced as
//! [`ProviderError::Api`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::types::{ChannelProfile, MediaItem};

const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3/";

/// Client for the `YouTube` Data API.
///
/// Use [`YouTubeClient::new`] for production or
/// [`YouTubeClient::with_base_url`] to point at a mock server in tests.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    search_url: Url,
    channels_url: Url,
    videos_url: Url,
}

impl YouTubeClient {
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

        // Normalise: the base must end with exactly one slash so joins append
        // a path segment rather than replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|e| ProviderError::Api(format!("invalid base URL '{base_url}': {e}")))?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| ProviderError::Api(format!("invalid endpoint '{path}': {e}")))
        };

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url: join("search")?,
            channels_url: join("channels")?,
            videos_url: join("videos")?,
        })
    }

    /// Resolves a free-form channel query (handle or name) to a full
    /// [`ChannelProfile`] via the `search` and `channels` endpoints.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Api`] if the API returns an error envelope or no
    ///   channel matches the query.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if a response does not match the
    ///   expected shape.
    pub async fn resolve_channel(&self, query: &str) -> Result<ChannelProfile, ProviderError> {
        let url = self.build_url(
            &self.search_url,
            &[("part", "snippet"), ("type", "channel"), ("q", query)],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: SearchEnvelope = parse(body, &format!("search(q={query})"))?;
        let channel_id = envelope
            .items
            .into_iter()
            .find_map(|item| item.id.channel_id)
            .ok_or_else(|| ProviderError::Api(format!("no channel matched '{query}'")))?;

        let url = self.build_url(
            &self.channels_url,
            &[("part", "snippet,statistics,status"), ("id", &channel_id)],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ChannelsEnvelope = parse(body, &format!("channels(id={channel_id})"))?;
        let item = envelope
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Api(format!("channel '{channel_id}' not found")))?;

        Ok(ChannelProfile {
            channel_id,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: item
                .snippet
                .thumbnails
                .default
                .map(|t| t.url)
                .unwrap_or_default(),
            subscriber_count: lenient_count(item.statistics.subscriber_count.as_deref()),
            total_views: lenient_count(item.statistics.view_count.as_deref()),
            published_at: item.snippet.published_at,
            verified: item.status.is_some_and(|s| s.is_verified),
        })
    }

    /// Fetches the channel's most recent uploads with statistics,
    /// newest first.
    ///
    /// Items the API returns without a statistics block are dropped.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Api`] if the API returns an error envelope.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if a response does not match the
    ///   expected shape.
    pub async fn recent_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<MediaItem>, ProviderError> {
        let max = max_results.to_string();
        let url = self.build_url(
            &self.search_url,
            &[
                ("part", "snippet"),
                ("type", "video"),
                ("channelId", channel_id),
                ("order", "date"),
                ("maxResults", &max),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: SearchEnvelope = parse(body, &format!("search(channelId={channel_id})"))?;
        let video_ids: Vec<String> = envelope
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = video_ids.join(",");
        let url = self.build_url(
            &self.videos_url,
            &[("part", "snippet,statistics"), ("id", &ids)],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: VideosEnvelope = parse(body, &format!("videos(id={ids})"))?;
        let items = envelope
            .items
            .into_iter()
            .filter_map(|item| {
                let stats = item.statistics?;
                Some(MediaItem {
                    title: item.snippet.title,
                    description: item.snippet.description,
                    published_at: item.snippet.published_at,
                    view_count: lenient_count(stats.view_count.as_deref()),
                    like_count: lenient_count(stats.like_count.as_deref()),
                    comment_count: lenient_count(stats.comment_count.as_deref()),
                })
            })
            .collect();
        Ok(items)
    }

    /// Clones an endpoint URL and appends the API key plus extra query
    /// parameters via [`Url::query_pairs_mut`], ensuring safe encoding.
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, ProviderError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Surfaces the API's `{"error": {"message": ...}}` envelope.
    fn check_api_error(body: &serde_json::Value) -> Result<(), ProviderError> {
        if let Some(err) = body.get("error") {
            let msg = err
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            tracing::warn!(message = %msg, "video platform API rejected request");
            return Err(ProviderError::Api(msg));
        }
        Ok(())
    }
}

/// Parse a count the API serializes as a JSON string; absent or malformed
/// values count as zero.
fn lenient_count(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn parse<T: serde::de::DeserializeOwned>(
    body: serde_json::Value,
    context: &str,
) -> Result<T, ProviderError> {
    serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct ChannelsEnvelope {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Deserialize)]
struct ChannelItem {
    snippet: ChannelSnippet,
    statistics: ChannelStatistics,
    #[serde(default)]
    status: Option<ChannelStatus>,
}

#[derive(Deserialize)]
struct ChannelSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    #[serde(default)]
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    subscriber_count: Option<String>,
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
}

#[derive(Deserialize)]
struct ChannelStatus {
    #[serde(rename = "isVerified", default)]
    is_verified: bool,
}

#[derive(Deserialize)]
struct VideosEnvelope {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    snippet: VideoSnippet,
    #[serde(default)]
    statistics: Option<VideoStatistics>,
}

#[derive(Deserialize)]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct VideoStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}
