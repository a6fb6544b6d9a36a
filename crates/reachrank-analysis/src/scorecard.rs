//! Weighted scorecard calculator.
//!
//! Reduces the combined category records into three weighted sub-scores and
//! one composite score. Coefficients are fixed design constants; each score
//! is clamped to `[0, 100]` independently before the composite is formed.

use crate::metrics::clamp_metric;
use crate::records::{
    CredibilityRecord, EngagementRecord, ScorecardRecord, SourceWeights, TimelineRecord,
};

/// Flat penalty applied when the spam flag is set.
const SPAM_PENALTY: f64 = 20.0;

/// Informational contribution attributed to each auxiliary provider.
const AUXILIARY_WEIGHT: f64 = 20.0;

/// Which platforms supplied an input link for this run.
#[derive(Debug, Clone, Copy)]
pub struct PlatformInputs {
    pub youtube: bool,
    pub instagram: bool,
}

/// Compute the weighted scorecard from the combined category records.
#[must_use]
pub fn calculate(
    credibility: &CredibilityRecord,
    timeline: &TimelineRecord,
    engagement: &EngagementRecord,
    platforms: PlatformInputs,
) -> ScorecardRecord {
    let spam_penalty = if credibility.spam_flag {
        SPAM_PENALTY
    } else {
        0.0
    };
    let credibility_score = clamp_metric(
        0.15 * credibility.news_authority
            + 0.01 * credibility.web_presence
            + 0.10 * credibility.consistency
            + 0.15 * credibility.content_quality
            + 0.15 * credibility.peer_review
            - spam_penalty
            + 0.10 * credibility.authority_links
            + 0.10 * credibility.originality
            + 0.10 * credibility.verified
            - 0.05 * credibility.audience_overlap,
    );

    let longevity_score = clamp_metric(
        0.40 * timeline.longevity
            + 0.15 * (100.0 - timeline.decay_rate)
            + 0.15 * timeline.legacy_impact
            + 0.10 * timeline.consistency_over_time
            + 0.10 * timeline.seasonal_filter
            + 0.10 * timeline.evolution
            + 0.10 * timeline.retention_longevity,
    );

    // The x8 on rate is deliberate: engagement rate is an already-small
    // percentage and is meant to dominate this sub-score.
    let engagement_score = clamp_metric(
        8.0 * engagement.rate
            + 0.20 * engagement.reach_amplifier
            + 0.15 * engagement.retention_index
            + 0.15 * engagement.comment_quality
            + 1.0 * engagement.growth_rate
            + 0.15 * engagement.social_echo
            - 0.10 * engagement.viral_spikes
            + 0.10 * engagement.depth_ratio
            + 0.10 * engagement.authenticity
            + 0.10 * engagement.engagement_decay
            + 0.10 * engagement.trend_relevance,
    );

    let total_score =
        clamp_metric(0.40 * credibility_score + 0.30 * longevity_score + 0.30 * engagement_score);

    ScorecardRecord {
        credibility_score,
        longevity_score,
        engagement_score,
        total_score,
        source_weights: source_weights(platforms),
    }
}

/// Platform weights split 100 across the platforms that supplied input; the
/// auxiliary providers contribute flat annotations regardless of platform
/// count, so the four values may sum past 100.
fn source_weights(platforms: PlatformInputs) -> SourceWeights {
    let (youtube, instagram) = match (platforms.youtube, platforms.instagram) {
        (true, true) => (50.0, 50.0),
        (true, false) => (100.0, 0.0),
        (false, true) => (0.0, 100.0),
        (false, false) => (0.0, 0.0),
    };
    SourceWeights {
        youtube,
        instagram,
        news: AUXILIARY_WEIGHT,
        web_search: AUXILIARY_WEIGHT,
    }
}
