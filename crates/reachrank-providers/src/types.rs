use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved video-platform channel with its headline statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub subscriber_count: u64,
    pub total_views: u64,
    pub published_at: DateTime<Utc>,
    pub verified: bool,
}

/// Per-item statistics for one recent upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

/// A photo/video-platform account profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramProfile {
    pub full_name: String,
    pub avatar_url: String,
    pub follower_count: u64,
    pub account_age_years: u32,
    pub total_views: u64,
    pub biography: String,
    pub verified: bool,
}

/// News mention counts and headlines for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsMentions {
    pub total_results: u64,
    pub headlines: Vec<String>,
}

/// Web-search result counts and top hits for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchResults {
    pub total_results: u64,
    pub items: Vec<SearchHit>,
}

/// One web-search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
}
