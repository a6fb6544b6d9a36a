//! Video-platform normalizers.
//!
//! The channel profile, one 20-item upload window, and the news mention
//! count are fetched once per analysis and shared across the category
//! normalizers to bound request volume.

use chrono::{Datelike, Duration, Utc};
use reachrank_providers::{
    ChannelProfile, MediaItem, NewsClient, NewsMentions, SearchClient, YouTubeClient,
};

use crate::metrics::{self, clamp_metric};
use crate::records::{
    CredibilityRecord, EngagementRecord, PeakMoment, PersonaRecord, TimelineRecord,
};

use super::infer_persona_type;

const SOURCE: &str = "YouTube Data API";
const NEWS_SOURCE: &str = "News API";
const SEARCH_SOURCE: &str = "Web Search API";

/// Items fetched for the timeline window; credibility and engagement use
/// the newest ten of these.
const TIMELINE_WINDOW: u32 = 20;
const RECENT_WINDOW: usize = 10;

/// Provider data resolved once per analysis and shared by the category
/// normalizers.
pub(crate) struct YoutubeContext {
    pub handle: String,
    pub profile: Option<ChannelProfile>,
    pub profile_note: Option<String>,
    pub videos: Vec<MediaItem>,
    pub videos_note: Option<String>,
    pub mentions: Option<NewsMentions>,
    pub mentions_note: Option<String>,
}

impl YoutubeContext {
    fn source_label(&self) -> String {
        match (&self.profile_note, &self.videos_note) {
            (None, None) => SOURCE.to_owned(),
            (Some(note), _) | (None, Some(note)) => note.clone(),
        }
    }

    fn recent(&self) -> &[MediaItem] {
        &self.videos[..self.videos.len().min(RECENT_WINDOW)]
    }
}

/// Resolve the channel, its recent uploads, and the news mention count for
/// a handle. Failures are converted to notes; the context is always usable.
pub(crate) async fn resolve_context(
    youtube: &YouTubeClient,
    news: &NewsClient,
    handle: &str,
) -> YoutubeContext {
    let mut ctx = YoutubeContext {
        handle: handle.to_owned(),
        profile: None,
        profile_note: None,
        videos: Vec::new(),
        videos_note: None,
        mentions: None,
        mentions_note: None,
    };

    match youtube.resolve_channel(handle).await {
        Ok(profile) => ctx.profile = Some(profile),
        Err(e) => {
            tracing::warn!(handle, source = "youtube", error = %e, "channel resolution failed");
            ctx.profile_note = Some(format!("{SOURCE} (failed: {e})"));
        }
    }

    if let Some(profile) = &ctx.profile {
        match youtube.recent_videos(&profile.channel_id, TIMELINE_WINDOW).await {
            Ok(videos) => ctx.videos = videos,
            Err(e) => {
                tracing::warn!(handle, source = "youtube", error = %e, "video fetch failed");
                ctx.videos_note = Some(format!("{SOURCE} (failed: {e})"));
            }
        }
    }

    match news.mentions(handle, None).await {
        Ok(mentions) => ctx.mentions = Some(mentions),
        Err(e) => {
            tracing::warn!(handle, source = "news", error = %e, "news mention fetch failed");
            ctx.mentions_note = Some(format!("{NEWS_SOURCE} (failed: {e})"));
        }
    }

    ctx
}

fn account_age_years(profile: &ChannelProfile) -> u32 {
    let years = Utc::now().year() - profile.published_at.year();
    u32::try_from(years.max(0)).unwrap_or(0)
}

pub(crate) fn persona(ctx: &YoutubeContext) -> PersonaRecord {
    let Some(profile) = &ctx.profile else {
        return PersonaRecord {
            name: ctx.handle.clone(),
            source_label: ctx.source_label(),
            ..PersonaRecord::neutral()
        };
    };
    let bio = if profile.description.is_empty() {
        "No bio available".to_owned()
    } else {
        profile.description.clone()
    };
    PersonaRecord {
        name: profile.title.clone(),
        avatar_url: profile.thumbnail_url.clone(),
        follower_count: profile.subscriber_count,
        account_age_years: account_age_years(profile),
        total_views: profile.total_views,
        persona_type: infer_persona_type(&profile.description),
        source_label: SOURCE.to_owned(),
        channel_id: profile.channel_id.clone(),
        bio,
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) async fn credibility(ctx: &YoutubeContext, search: &SearchClient) -> CredibilityRecord {
    let mut record = CredibilityRecord::neutral();

    if let Some(mentions) = &ctx.mentions {
        record.news_authority = mentions.total_results.min(100) as f64;
        let handle = ctx.handle.to_lowercase();
        record.cross_verified = mentions
            .headlines
            .iter()
            .any(|headline| headline.to_lowercase().contains(&handle));
        record.sources.push(NEWS_SOURCE.to_owned());
    } else if let Some(note) = &ctx.mentions_note {
        record.sources.push(note.clone());
    }

    match search.search(&ctx.handle).await {
        Ok(results) => {
            record.web_presence = clamp_metric(results.total_results as f64 / 1000.0);
            let authority = results
                .items
                .iter()
                .filter(|hit| hit.link.contains(".edu") || hit.link.contains(".org"))
                .count();
            record.authority_links = clamp_metric(authority as f64 * 10.0);
            record.peer_review = if results
                .items
                .iter()
                .any(|hit| hit.title.to_lowercase().contains("top influencer"))
            {
                50.0
            } else {
                0.0
            };
            record.sources.push(SEARCH_SOURCE.to_owned());
        }
        Err(e) => {
            tracing::warn!(handle = %ctx.handle, source = "web_search", error = %e, "web search failed");
            record.sources.push(format!("{SEARCH_SOURCE} (failed: {e})"));
        }
    }

    if let Some(profile) = &ctx.profile {
        let recent = ctx.recent();
        if !recent.is_empty() {
            record.consistency = metrics::consistency(recent);
            record.content_quality = metrics::content_quality(recent);
            record.originality = metrics::originality(recent);
            record.audience_overlap = if recent
                .iter()
                .any(|item| item.description.contains("collab"))
            {
                20.0
            } else {
                0.0
            };
        }
        if profile.subscriber_count > 0 {
            record.spam_flag =
                profile.total_views as f64 / (profile.subscriber_count as f64) < 0.01;
        }
        record.verified = if profile.verified { 50.0 } else { 0.0 };
        record.sources.push(SOURCE.to_owned());
    } else if let Some(note) = &ctx.profile_note {
        record.sources.push(note.clone());
    }
    if let Some(note) = &ctx.videos_note {
        record.sources.push(note.clone());
    }

    record
}

#[allow(clippy::cast_precision_loss)]
pub(crate) async fn timeline(ctx: &YoutubeContext, news: &NewsClient) -> TimelineRecord {
    let mut record = TimelineRecord {
        source_label: ctx.source_label(),
        ..TimelineRecord::neutral()
    };

    if let Some(profile) = &ctx.profile {
        record.longevity = clamp_metric(f64::from(account_age_years(profile)) * 10.0);

        if !ctx.videos.is_empty() {
            let recent_views: u64 = ctx.videos.iter().take(5).map(|v| v.view_count).sum();
            let older_views: u64 = ctx.videos.iter().skip(5).map(|v| v.view_count).sum();

            if profile.total_views > 0 {
                let total = profile.total_views as f64;
                record.trend_momentum = clamp_metric(recent_views as f64 / total * 100.0);
                record.legacy_impact = clamp_metric(older_views as f64 / total * 100.0);
            }
            if older_views > 0 {
                let older = older_views as f64;
                record.decay_rate = clamp_metric((older - recent_views as f64) / older * 100.0);
            }
            let max_views = ctx.videos.iter().map(|v| v.view_count).max().unwrap_or(0);
            let min_views = ctx
                .videos
                .iter()
                .map(|v| v.view_count)
                .min()
                .unwrap_or(0)
                .max(1);
            record.volatility = clamp_metric(max_views as f64 / min_views as f64 * 10.0);

            record.consistency_over_time = metrics::consistency(&ctx.videos);
            record.seasonal_filter = metrics::seasonal_filter(&ctx.videos);
            record.evolution = metrics::evolution(&ctx.videos);
            record.retention_longevity = metrics::retention_longevity(&ctx.videos);
            record.peak_moments = ctx
                .videos
                .iter()
                .map(|item| PeakMoment {
                    date: item.published_at.format("%Y-%m-%d").to_string(),
                    views: item.view_count,
                })
                .collect();
        }

        if profile.subscriber_count > 100_000 {
            record
                .milestones
                .push("Reached 100k subscribers".to_owned());
        }
    }

    // Buzz uses its own 7-day news window, separate from the shared mention
    // count.
    let since = Utc::now() - Duration::days(7);
    match news.mentions(&ctx.handle, Some(since)).await {
        Ok(mentions) => record.buzz = mentions.total_results.min(100) as f64,
        Err(e) => {
            tracing::warn!(handle = %ctx.handle, source = "news", error = %e, "buzz fetch failed");
            record.source_label = format!("{}; {NEWS_SOURCE} (failed: {e})", record.source_label);
        }
    }

    record
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn engagement(ctx: &YoutubeContext) -> EngagementRecord {
    let mut record = EngagementRecord {
        source_label: ctx.source_label(),
        ..EngagementRecord::neutral()
    };
    let Some(profile) = &ctx.profile else {
        return record;
    };

    let recent = ctx.recent();
    if !recent.is_empty() {
        let total_views: u64 = recent.iter().map(|v| v.view_count).sum();
        let total_likes: u64 = recent.iter().map(|v| v.like_count).sum();
        let total_comments: u64 = recent.iter().map(|v| v.comment_count).sum();

        if total_views > 0 {
            record.rate =
                clamp_metric((total_likes + total_comments) as f64 / total_views as f64 * 100.0);
        }
        if profile.subscriber_count > 0 {
            record.retention_index =
                clamp_metric(total_views as f64 / profile.subscriber_count as f64 * 100.0);
        }
        record.comment_quality =
            clamp_metric(total_comments as f64 / recent.len() as f64 * 5.0);

        let age = account_age_years(profile);
        if age > 0 {
            record.growth_rate =
                clamp_metric(profile.subscriber_count as f64 / f64::from(age) / 1000.0);
        }

        let mean_views = total_views as f64 / recent.len() as f64;
        record.viral_spikes = if recent
            .iter()
            .any(|item| item.view_count as f64 > mean_views * 5.0)
        {
            50.0
        } else {
            0.0
        };

        // Placeholder: no real sentiment analysis is performed.
        record.sentiment = 50.0;

        record.trend_series = recent
            .iter()
            .map(|item| {
                clamp_metric(
                    (item.like_count + item.comment_count) as f64
                        / item.view_count.max(1) as f64
                        * 100.0,
                )
            })
            .collect();
        record.heatmap_series = recent.iter().map(|item| item.view_count).collect();

        record.depth_ratio = metrics::depth_ratio(recent);
        record.authenticity = metrics::authenticity(recent);
        record.engagement_decay = metrics::engagement_decay(recent);
        record.trend_relevance = metrics::trend_relevance(recent);
    }

    let news_total = ctx
        .mentions
        .as_ref()
        .map_or(0.0, |m| m.total_results as f64);
    record.reach_amplifier = if news_total > 0.0 {
        clamp_metric(record.rate * (1.0 + news_total / 100.0))
    } else {
        record.rate
    };
    record.social_echo = clamp_metric(news_total * 2.0);

    record
}
