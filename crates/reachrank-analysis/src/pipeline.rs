//! Analysis orchestrator.
//!
//! One `run_analysis` call drives the whole flow: identifier extraction,
//! per-platform context resolution, the category normalizers, cross-platform
//! combination, and the scorecard. The two platform branches run
//! concurrently; within the video branch the credibility and timeline
//! normalizers overlap their provider calls.

use reachrank_core::{config::AppConfig, handle};
use reachrank_providers::{
    InstagramClient, NewsClient, ProviderError, SearchClient, YouTubeClient,
};

use crate::combine;
use crate::error::AnalysisError;
use crate::normalize::{instagram, youtube};
use crate::records::{
    AnalysisReport, CredibilityRecord, EngagementRecord, PersonaRecord, TimelineRecord,
};
use crate::scorecard::{self, PlatformInputs};

/// The provider clients one analysis run draws from.
pub struct ProviderSet {
    pub youtube: YouTubeClient,
    pub instagram: InstagramClient,
    pub news: NewsClient,
    pub search: SearchClient,
}

impl ProviderSet {
    /// Construct all four clients from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if any underlying HTTP client fails
    /// to build.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let timeout = config.provider_timeout_secs;
        Ok(Self {
            youtube: YouTubeClient::new(&config.youtube_api_key, timeout)?,
            instagram: InstagramClient::new(&config.rapidapi_key, timeout)?,
            news: NewsClient::new(&config.news_api_key, timeout)?,
            search: SearchClient::new(&config.search_api_key, &config.search_engine_id, timeout)?,
        })
    }
}

/// Lifecycle of a single analysis run, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Complete,
    Failed,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
            RunState::Complete => write!(f, "complete"),
            RunState::Failed => write!(f, "failed"),
        }
    }
}

fn transition(from: RunState, to: RunState) -> RunState {
    tracing::debug!(%from, %to, "run state transition");
    to
}

type PlatformRecords = (
    PersonaRecord,
    CredibilityRecord,
    TimelineRecord,
    EngagementRecord,
);

/// Run a full analysis over zero, one, or two platform inputs.
///
/// Provider failures degrade the affected records and never fail the run;
/// the only error paths are missing input and an internal contract
/// violation.
///
/// # Errors
///
/// Returns [`AnalysisError::NoInput`] when neither identifier is supplied,
/// and [`AnalysisError::Contract`] if a non-finite sub-metric reaches the
/// scorecard.
pub async fn run_analysis(
    providers: &ProviderSet,
    youtube_input: Option<&str>,
    instagram_input: Option<&str>,
) -> Result<AnalysisReport, AnalysisError> {
    if youtube_input.is_none() && instagram_input.is_none() {
        return Err(AnalysisError::NoInput);
    }
    let mut state = transition(RunState::Idle, RunState::Running);

    let youtube_branch = async {
        let input = youtube_input?;
        let identifier = handle::youtube_identifier(input);
        let ctx = youtube::resolve_context(&providers.youtube, &providers.news, &identifier).await;
        let persona = youtube::persona(&ctx);
        let engagement = youtube::engagement(&ctx);
        let (credibility, timeline) = futures::join!(
            youtube::credibility(&ctx, &providers.search),
            youtube::timeline(&ctx, &providers.news),
        );
        Some((persona, credibility, timeline, engagement))
    };

    let instagram_branch = async {
        let input = instagram_input?;
        let identifier = handle::instagram_identifier(input);
        let ctx = instagram::resolve_context(&providers.instagram, &identifier).await;
        Some((
            instagram::persona(&ctx),
            instagram::credibility(&ctx),
            instagram::timeline(&ctx),
            instagram::engagement(&ctx),
        ))
    };

    let (youtube_records, instagram_records): (Option<PlatformRecords>, Option<PlatformRecords>) =
        futures::join!(youtube_branch, instagram_branch);

    let (yt_persona, yt_credibility, yt_timeline, yt_engagement) = split(youtube_records);
    let (ig_persona, ig_credibility, ig_timeline, ig_engagement) = split(instagram_records);

    let persona = combine::combine_persona(yt_persona, ig_persona);
    let credibility = combine::combine_credibility(yt_credibility, ig_credibility);
    let timeline = combine::combine_timeline(yt_timeline, ig_timeline);
    let engagement = combine::combine_engagement(yt_engagement, ig_engagement);

    if let Err(e) = check_contract(&credibility, &timeline, &engagement) {
        state = transition(state, RunState::Failed);
        tracing::error!(%state, error = %e, "analysis aborted");
        return Err(e);
    }

    let scorecard = scorecard::calculate(
        &credibility,
        &timeline,
        &engagement,
        PlatformInputs {
            youtube: youtube_input.is_some(),
            instagram: instagram_input.is_some(),
        },
    );

    state = transition(state, RunState::Complete);
    tracing::info!(
        %state,
        total_score = scorecard.total_score,
        "analysis finished"
    );

    Ok(AnalysisReport {
        persona,
        credibility,
        timeline,
        engagement,
        scorecard,
    })
}

#[allow(clippy::type_complexity)]
fn split(
    records: Option<PlatformRecords>,
) -> (
    Option<PersonaRecord>,
    Option<CredibilityRecord>,
    Option<TimelineRecord>,
    Option<EngagementRecord>,
) {
    match records {
        Some((persona, credibility, timeline, engagement)) => (
            Some(persona),
            Some(credibility),
            Some(timeline),
            Some(engagement),
        ),
        None => (None, None, None, None),
    }
}

/// Every numeric sub-metric reaching the scorecard must be finite. A
/// violation indicates a normalizer bug, not bad provider data.
fn check_contract(
    credibility: &CredibilityRecord,
    timeline: &TimelineRecord,
    engagement: &EngagementRecord,
) -> Result<(), AnalysisError> {
    let fields = [
        ("credibility.news_authority", credibility.news_authority),
        ("credibility.web_presence", credibility.web_presence),
        ("credibility.consistency", credibility.consistency),
        ("credibility.content_quality", credibility.content_quality),
        ("credibility.peer_review", credibility.peer_review),
        ("credibility.authority_links", credibility.authority_links),
        ("credibility.originality", credibility.originality),
        ("credibility.verified", credibility.verified),
        ("credibility.audience_overlap", credibility.audience_overlap),
        ("timeline.longevity", timeline.longevity),
        ("timeline.trend_momentum", timeline.trend_momentum),
        ("timeline.decay_rate", timeline.decay_rate),
        ("timeline.buzz", timeline.buzz),
        (
            "timeline.consistency_over_time",
            timeline.consistency_over_time,
        ),
        ("timeline.legacy_impact", timeline.legacy_impact),
        ("timeline.volatility", timeline.volatility),
        ("timeline.seasonal_filter", timeline.seasonal_filter),
        ("timeline.evolution", timeline.evolution),
        ("timeline.retention_longevity", timeline.retention_longevity),
        ("engagement.rate", engagement.rate),
        ("engagement.sentiment", engagement.sentiment),
        ("engagement.reach_amplifier", engagement.reach_amplifier),
        ("engagement.retention_index", engagement.retention_index),
        ("engagement.comment_quality", engagement.comment_quality),
        ("engagement.growth_rate", engagement.growth_rate),
        ("engagement.viral_spikes", engagement.viral_spikes),
        ("engagement.social_echo", engagement.social_echo),
        ("engagement.depth_ratio", engagement.depth_ratio),
        ("engagement.authenticity", engagement.authenticity),
        ("engagement.engagement_decay", engagement.engagement_decay),
        ("engagement.trend_relevance", engagement.trend_relevance),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(AnalysisError::Contract(format!(
                "{name} is not finite: {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_providers() -> ProviderSet {
        // Port 1 is never serving; nothing in these tests should connect.
        let base = "http://127.0.0.1:1";
        ProviderSet {
            youtube: YouTubeClient::with_base_url("k", 1, base).unwrap(),
            instagram: InstagramClient::with_base_url("k", 1, base).unwrap(),
            news: NewsClient::with_base_url("k", 1, base).unwrap(),
            search: SearchClient::with_base_url("k", "cx", 1, base).unwrap(),
        }
    }

    #[tokio::test]
    async fn missing_both_inputs_is_an_error() {
        let providers = unreachable_providers();
        let result = run_analysis(&providers, None, None).await;
        assert!(matches!(result, Err(AnalysisError::NoInput)));
    }

    #[test]
    fn contract_rejects_non_finite_sub_metrics() {
        let mut engagement = EngagementRecord::neutral();
        engagement.rate = f64::NAN;
        let err = check_contract(
            &CredibilityRecord::neutral(),
            &TimelineRecord::neutral(),
            &engagement,
        )
        .unwrap_err();
        assert!(err.to_string().contains("engagement.rate"));
    }

    #[test]
    fn contract_accepts_neutral_records() {
        assert!(check_contract(
            &CredibilityRecord::neutral(),
            &TimelineRecord::neutral(),
            &EngagementRecord::neutral(),
        )
        .is_ok());
    }
}
