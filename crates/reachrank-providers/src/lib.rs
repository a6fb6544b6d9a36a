//! Typed HTTP clients for the external metric providers.
//!
//! One client per provider: the video platform (`YouTube` Data API shape),
//! the photo/video platform (RapidAPI scraper shape), a news mention
//! provider, and a web-search provider. Every client accepts a custom base
//! URL so tests can point it at a wiremock server.

pub mod error;
pub mod instagram;
pub mod news;
pub mod types;
pub mod websearch;
pub mod youtube;

pub use error::ProviderError;
pub use instagram::InstagramClient;
pub use news::NewsClient;
pub use types::{ChannelProfile, InstagramProfile, MediaItem, NewsMentions, SearchHit, WebSearchResults};
pub use websearch::SearchClient;
pub use youtube::YouTubeClient;
