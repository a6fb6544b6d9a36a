//! Cross-platform record combiner.
//!
//! One total, side-effect-free function per category with the contract
//! `combine(A, B)`:
//!
//! - `(None, None)` yields the category's neutral record;
//! - one side present passes through unchanged (identity, no averaging);
//! - both present merge per-field: numeric sub-metrics average, booleans
//!   OR, set-like fields union, ordered lists prefer the non-empty side and
//!   A's ordering on ties (documented asymmetric tie-break), free text
//!   concatenates with a separator, identifiers prefer A's value.

use crate::metrics::clamp_metric;
use crate::records::{CredibilityRecord, EngagementRecord, PersonaRecord, TimelineRecord};

fn mean(a: f64, b: f64) -> f64 {
    clamp_metric((a + b) / 2.0)
}

fn union(a: Vec<String>, b: Vec<String>) -> Vec<String> {
    let mut merged = a;
    for entry in b {
        if !merged.contains(&entry) {
            merged.push(entry);
        }
    }
    merged
}

fn prefer_non_empty<T>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    if a.is_empty() {
        b
    } else {
        a
    }
}

/// Merge the two platforms' persona records.
///
/// Audience magnitudes are not 0–100 sub-metrics: follower and view counts
/// add, account age takes the maximum, and the archetype follows the
/// first-listed platform.
#[must_use]
pub fn combine_persona(a: Option<PersonaRecord>, b: Option<PersonaRecord>) -> PersonaRecord {
    match (a, b) {
        (None, None) => PersonaRecord::neutral(),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (Some(a), Some(b)) => PersonaRecord {
            name: format!("{} ({})", a.name, b.name),
            avatar_url: if a.avatar_url.is_empty() {
                b.avatar_url
            } else {
                a.avatar_url
            },
            follower_count: a.follower_count + b.follower_count,
            account_age_years: a.account_age_years.max(b.account_age_years),
            total_views: a.total_views + b.total_views,
            persona_type: a.persona_type,
            source_label: format!("{}, {}", a.source_label, b.source_label),
            channel_id: if a.channel_id.is_empty() {
                b.channel_id
            } else {
                a.channel_id
            },
            bio: format!("{} | {}", a.bio, b.bio),
        },
    }
}

/// Merge the two platforms' credibility records.
#[must_use]
pub fn combine_credibility(
    a: Option<CredibilityRecord>,
    b: Option<CredibilityRecord>,
) -> CredibilityRecord {
    match (a, b) {
        (None, None) => CredibilityRecord::neutral(),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (Some(a), Some(b)) => CredibilityRecord {
            news_authority: mean(a.news_authority, b.news_authority),
            web_presence: mean(a.web_presence, b.web_presence),
            consistency: mean(a.consistency, b.consistency),
            content_quality: mean(a.content_quality, b.content_quality),
            peer_review: mean(a.peer_review, b.peer_review),
            authority_links: mean(a.authority_links, b.authority_links),
            originality: mean(a.originality, b.originality),
            verified: mean(a.verified, b.verified),
            audience_overlap: mean(a.audience_overlap, b.audience_overlap),
            cross_verified: a.cross_verified || b.cross_verified,
            spam_flag: a.spam_flag || b.spam_flag,
            sources: union(a.sources, b.sources),
        },
    }
}

/// Merge the two platforms' timeline records.
///
/// Peak moments keep at most the top five of the preferred side.
#[must_use]
pub fn combine_timeline(a: Option<TimelineRecord>, b: Option<TimelineRecord>) -> TimelineRecord {
    match (a, b) {
        (None, None) => TimelineRecord::neutral(),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (Some(a), Some(b)) => {
            let mut peak_moments = prefer_non_empty(a.peak_moments, b.peak_moments);
            peak_moments.truncate(5);
            TimelineRecord {
                longevity: mean(a.longevity, b.longevity),
                trend_momentum: mean(a.trend_momentum, b.trend_momentum),
                decay_rate: mean(a.decay_rate, b.decay_rate),
                buzz: mean(a.buzz, b.buzz),
                consistency_over_time: mean(a.consistency_over_time, b.consistency_over_time),
                legacy_impact: mean(a.legacy_impact, b.legacy_impact),
                volatility: mean(a.volatility, b.volatility),
                seasonal_filter: mean(a.seasonal_filter, b.seasonal_filter),
                evolution: mean(a.evolution, b.evolution),
                retention_longevity: mean(a.retention_longevity, b.retention_longevity),
                milestones: union(a.milestones, b.milestones),
                peak_moments,
                source_label: format!("{}, {}", a.source_label, b.source_label),
            }
        }
    }
}

/// Merge the two platforms' engagement records.
#[must_use]
pub fn combine_engagement(
    a: Option<EngagementRecord>,
    b: Option<EngagementRecord>,
) -> EngagementRecord {
    match (a, b) {
        (None, None) => EngagementRecord::neutral(),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (Some(a), Some(b)) => EngagementRecord {
            rate: mean(a.rate, b.rate),
            sentiment: mean(a.sentiment, b.sentiment),
            reach_amplifier: mean(a.reach_amplifier, b.reach_amplifier),
            retention_index: mean(a.retention_index, b.retention_index),
            comment_quality: mean(a.comment_quality, b.comment_quality),
            growth_rate: mean(a.growth_rate, b.growth_rate),
            viral_spikes: mean(a.viral_spikes, b.viral_spikes),
            social_echo: mean(a.social_echo, b.social_echo),
            depth_ratio: mean(a.depth_ratio, b.depth_ratio),
            authenticity: mean(a.authenticity, b.authenticity),
            engagement_decay: mean(a.engagement_decay, b.engagement_decay),
            trend_relevance: mean(a.trend_relevance, b.trend_relevance),
            trend_series: prefer_non_empty(a.trend_series, b.trend_series),
            heatmap_series: prefer_non_empty(a.heatmap_series, b.heatmap_series),
            source_label: format!("{}, {}", a.source_label, b.source_label),
        },
    }
}
