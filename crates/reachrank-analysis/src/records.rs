//! Category records and the scorecard.
//!
//! Numeric sub-metrics are `f64` values clamped to `[0, 100]` after
//! combination. Each record type has a single `neutral()` constructor (all
//! zeros, empty lists, source `"N/A"`) used by normalizers on provider
//! failure, by the combiner's null/null case, and by tests. Records are
//! immutable once returned by a normalizer and are never persisted.

use serde::Serialize;

/// Account archetype inferred from bio keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PersonaType {
    ThoughtLeader,
    Entertainer,
    Creator,
    Unknown,
}

impl std::fmt::Display for PersonaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonaType::ThoughtLeader => write!(f, "Thought Leader"),
            PersonaType::Entertainer => write!(f, "Entertainer"),
            PersonaType::Creator => write!(f, "Creator"),
            PersonaType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Who the account is: identity, audience size, and archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaRecord {
    pub name: String,
    pub avatar_url: String,
    pub follower_count: u64,
    pub account_age_years: u32,
    pub total_views: u64,
    pub persona_type: PersonaType,
    pub source_label: String,
    pub channel_id: String,
    pub bio: String,
}

impl PersonaRecord {
    /// The neutral record substituted when no platform supplied data.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            name: "N/A".to_owned(),
            avatar_url: String::new(),
            follower_count: 0,
            account_age_years: 0,
            total_views: 0,
            persona_type: PersonaType::Unknown,
            source_label: "N/A".to_owned(),
            channel_id: String::new(),
            bio: "N/A".to_owned(),
        }
    }
}

/// How trustworthy the account looks across news, web, and content signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredibilityRecord {
    pub news_authority: f64,
    pub web_presence: f64,
    pub consistency: f64,
    pub content_quality: f64,
    pub peer_review: f64,
    pub authority_links: f64,
    pub originality: f64,
    pub verified: f64,
    pub audience_overlap: f64,
    pub cross_verified: bool,
    pub spam_flag: bool,
    /// Provider names that contributed, with failure notes for those that
    /// did not.
    pub sources: Vec<String>,
}

impl CredibilityRecord {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            news_authority: 0.0,
            web_presence: 0.0,
            consistency: 0.0,
            content_quality: 0.0,
            peer_review: 0.0,
            authority_links: 0.0,
            originality: 0.0,
            verified: 0.0,
            audience_overlap: 0.0,
            cross_verified: false,
            spam_flag: false,
            sources: Vec::new(),
        }
    }
}

/// A dated view-count peak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakMoment {
    pub date: String,
    pub views: u64,
}

/// How the account's impact has developed over time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRecord {
    pub longevity: f64,
    pub trend_momentum: f64,
    pub decay_rate: f64,
    pub buzz: f64,
    pub consistency_over_time: f64,
    pub legacy_impact: f64,
    pub volatility: f64,
    pub seasonal_filter: f64,
    pub evolution: f64,
    pub retention_longevity: f64,
    pub milestones: Vec<String>,
    /// Most-recent-first.
    pub peak_moments: Vec<PeakMoment>,
    pub source_label: String,
}

impl TimelineRecord {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            longevity: 0.0,
            trend_momentum: 0.0,
            decay_rate: 0.0,
            buzz: 0.0,
            consistency_over_time: 0.0,
            legacy_impact: 0.0,
            volatility: 0.0,
            seasonal_filter: 0.0,
            evolution: 0.0,
            retention_longevity: 0.0,
            milestones: Vec::new(),
            peak_moments: Vec::new(),
            source_label: "N/A".to_owned(),
        }
    }
}

/// How the audience interacts with the account's content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRecord {
    pub rate: f64,
    /// Constant placeholder; no real sentiment analysis is performed.
    pub sentiment: f64,
    pub reach_amplifier: f64,
    pub retention_index: f64,
    pub comment_quality: f64,
    pub growth_rate: f64,
    pub viral_spikes: f64,
    pub social_echo: f64,
    pub depth_ratio: f64,
    pub authenticity: f64,
    pub engagement_decay: f64,
    pub trend_relevance: f64,
    /// Per-item engagement percentages, most-recent-first.
    pub trend_series: Vec<f64>,
    /// Raw per-item view counts, most-recent-first.
    pub heatmap_series: Vec<u64>,
    pub source_label: String,
}

impl EngagementRecord {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            rate: 0.0,
            sentiment: 0.0,
            reach_amplifier: 0.0,
            retention_index: 0.0,
            comment_quality: 0.0,
            growth_rate: 0.0,
            viral_spikes: 0.0,
            social_echo: 0.0,
            depth_ratio: 0.0,
            authenticity: 0.0,
            engagement_decay: 0.0,
            trend_relevance: 0.0,
            trend_series: Vec::new(),
            heatmap_series: Vec::new(),
            source_label: "N/A".to_owned(),
        }
    }
}

/// Per-provider contribution percentages.
///
/// Platform weights split 100 between the platforms that supplied input;
/// news and web-search contributions are flat 20% annotations. The four
/// values are informational and deliberately not normalized to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceWeights {
    pub youtube: f64,
    pub instagram: f64,
    pub news: f64,
    pub web_search: f64,
}

/// The weighted sub-scores and composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardRecord {
    pub credibility_score: f64,
    pub longevity_score: f64,
    pub engagement_score: f64,
    pub total_score: f64,
    pub source_weights: SourceWeights,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub persona: PersonaRecord,
    pub credibility: CredibilityRecord,
    pub timeline: TimelineRecord,
    pub engagement: EngagementRecord,
    pub scorecard: ScorecardRecord,
}
