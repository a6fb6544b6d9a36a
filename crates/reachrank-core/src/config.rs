//! Environment-driven application configuration.

const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// API credentials and client settings for the external providers.
#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub news_api_key: String,
    pub search_api_key: String,
    pub search_engine_id: String,
    pub rapidapi_key: String,
    pub provider_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("news_api_key", &"[redacted]")
            .field("search_api_key", &"[redacted]")
            .field("search_engine_id", &self.search_engine_id)
            .field("rapidapi_key", &"[redacted]")
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Returns an error string listing any missing variables.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any required env var is not set.
    ///
    /// # Panics
    ///
    /// Does not panic: all `unwrap` calls are guarded by the `missing` check above.
    pub fn from_env() -> Result<Self, String> {
        let mut missing = Vec::new();

        let get = |key: &str| -> Option<String> { std::env::var(key).ok() };

        let youtube_api_key = get("YOUTUBE_API_KEY");
        let news_api_key = get("NEWS_API_KEY");
        let search_api_key = get("SEARCH_API_KEY");
        let search_engine_id = get("SEARCH_ENGINE_ID");
        let rapidapi_key = get("RAPIDAPI_KEY");

        if youtube_api_key.is_none() {
            missing.push("YOUTUBE_API_KEY");
        }
        if news_api_key.is_none() {
            missing.push("NEWS_API_KEY");
        }
        if search_api_key.is_none() {
            missing.push("SEARCH_API_KEY");
        }
        if search_engine_id.is_none() {
            missing.push("SEARCH_ENGINE_ID");
        }
        if rapidapi_key.is_none() {
            missing.push("RAPIDAPI_KEY");
        }

        if !missing.is_empty() {
            return Err(format!("missing reachrank env vars: {}", missing.join(", ")));
        }

        let provider_timeout_secs = get("PROVIDER_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);

        Ok(Self {
            youtube_api_key: youtube_api_key.unwrap(),
            news_api_key: news_api_key.unwrap(),
            search_api_key: search_api_key.unwrap(),
            search_engine_id: search_engine_id.unwrap(),
            rapidapi_key: rapidapi_key.unwrap(),
            provider_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_keys() {
        let config = AppConfig {
            youtube_api_key: "yt-secret".to_owned(),
            news_api_key: "news-secret".to_owned(),
            search_api_key: "search-secret".to_owned(),
            search_engine_id: "cx-123".to_owned(),
            rapidapi_key: "rapid-secret".to_owned(),
            provider_timeout_secs: 30,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"), "keys leaked: {rendered}");
        assert!(rendered.contains("cx-123"), "engine id is not a secret");
    }
}
