//! Photo/video-platform normalizers.
//!
//! This source exposes profile-level data only, so most item-derived
//! sub-metrics stay at their neutral zero.

use reachrank_providers::{InstagramClient, InstagramProfile};

use crate::metrics::clamp_metric;
use crate::records::{CredibilityRecord, EngagementRecord, PersonaRecord, TimelineRecord};

use super::infer_persona_type;

const SOURCE: &str = "Instagram Scraper API";

/// Provider data resolved once per analysis.
pub(crate) struct InstagramContext {
    pub username: String,
    pub profile: Option<InstagramProfile>,
    pub note: Option<String>,
}

impl InstagramContext {
    fn source_label(&self) -> String {
        self.note.clone().unwrap_or_else(|| SOURCE.to_owned())
    }
}

/// Fetch the account profile for a username. Failure leaves the context
/// with a note; the category normalizers still produce valid records.
pub(crate) async fn resolve_context(
    instagram: &InstagramClient,
    username: &str,
) -> InstagramContext {
    match instagram.fetch_profile(username).await {
        Ok(profile) => InstagramContext {
            username: username.to_owned(),
            profile: Some(profile),
            note: None,
        },
        Err(e) => {
            tracing::warn!(username, source = "instagram", error = %e, "profile fetch failed");
            InstagramContext {
                username: username.to_owned(),
                profile: None,
                note: Some(format!("{SOURCE} (failed: {e})")),
            }
        }
    }
}

pub(crate) fn persona(ctx: &InstagramContext) -> PersonaRecord {
    let Some(profile) = &ctx.profile else {
        return PersonaRecord {
            name: ctx.username.clone(),
            source_label: ctx.source_label(),
            ..PersonaRecord::neutral()
        };
    };
    let bio = if profile.biography.is_empty() {
        "No bio available".to_owned()
    } else {
        profile.biography.clone()
    };
    PersonaRecord {
        name: profile.full_name.clone(),
        avatar_url: profile.avatar_url.clone(),
        follower_count: profile.follower_count,
        account_age_years: profile.account_age_years,
        total_views: profile.total_views,
        persona_type: infer_persona_type(&profile.biography),
        source_label: SOURCE.to_owned(),
        channel_id: String::new(),
        bio,
    }
}

pub(crate) fn credibility(ctx: &InstagramContext) -> CredibilityRecord {
    let mut record = CredibilityRecord::neutral();
    if let Some(profile) = &ctx.profile {
        record.verified = if profile.verified { 50.0 } else { 0.0 };
        record.sources.push(SOURCE.to_owned());
    } else if let Some(note) = &ctx.note {
        record.sources.push(note.clone());
    }
    record
}

pub(crate) fn timeline(ctx: &InstagramContext) -> TimelineRecord {
    let mut record = TimelineRecord {
        source_label: ctx.source_label(),
        ..TimelineRecord::neutral()
    };
    if let Some(profile) = &ctx.profile {
        record.longevity = clamp_metric(f64::from(profile.account_age_years) * 10.0);
        if profile.follower_count > 100_000 {
            record.milestones.push("Reached 100k followers".to_owned());
        }
    }
    record
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn engagement(ctx: &InstagramContext) -> EngagementRecord {
    let mut record = EngagementRecord {
        source_label: ctx.source_label(),
        ..EngagementRecord::neutral()
    };
    if let Some(profile) = &ctx.profile {
        let age = f64::from(profile.account_age_years.max(1));
        record.growth_rate = clamp_metric(profile.follower_count as f64 / age / 1000.0);
        // Placeholder: no real sentiment analysis is performed.
        record.sentiment = 50.0;
        record.authenticity = if profile.verified { 100.0 } else { 50.0 };
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PersonaType;

    fn profile() -> InstagramProfile {
        InstagramProfile {
            full_name: "Some Creator".to_owned(),
            avatar_url: "https://img.example/ig.png".to_owned(),
            follower_count: 250_000,
            account_age_years: 5,
            total_views: 9_000_000,
            biography: "entertainment daily".to_owned(),
            verified: true,
        }
    }

    fn resolved() -> InstagramContext {
        InstagramContext {
            username: "somecreator".to_owned(),
            profile: Some(profile()),
            note: None,
        }
    }

    fn failed() -> InstagramContext {
        InstagramContext {
            username: "somecreator".to_owned(),
            profile: None,
            note: Some(format!("{SOURCE} (failed: HTTP error: 429)")),
        }
    }

    #[test]
    fn persona_maps_profile_fields() {
        let record = persona(&resolved());
        assert_eq!(record.name, "Some Creator");
        assert_eq!(record.follower_count, 250_000);
        assert_eq!(record.persona_type, PersonaType::Entertainer);
        assert_eq!(record.source_label, SOURCE);
        assert!(record.channel_id.is_empty());
    }

    #[test]
    fn persona_failure_uses_username_and_note() {
        let record = persona(&failed());
        assert_eq!(record.name, "somecreator");
        assert_eq!(record.follower_count, 0);
        assert!(record.source_label.contains("failed"));
    }

    #[test]
    fn credibility_only_carries_verification() {
        let record = credibility(&resolved());
        assert_eq!(record.verified, 50.0);
        assert_eq!(record.news_authority, 0.0);
        assert_eq!(record.sources, vec![SOURCE.to_owned()]);
    }

    #[test]
    fn timeline_scales_age_and_marks_milestone() {
        let record = timeline(&resolved());
        assert_eq!(record.longevity, 50.0);
        assert_eq!(record.milestones, vec!["Reached 100k followers".to_owned()]);
        assert!(record.peak_moments.is_empty());
    }

    #[test]
    fn engagement_derives_growth_and_authenticity() {
        let record = engagement(&resolved());
        // 250k followers / 5 years / 1000 = 50.
        assert!((record.growth_rate - 50.0).abs() < 1e-9);
        assert_eq!(record.sentiment, 50.0);
        assert_eq!(record.authenticity, 100.0);
        assert_eq!(record.rate, 0.0);
    }

    #[test]
    fn failed_context_yields_neutral_records_with_notes() {
        let ctx = failed();
        assert_eq!(credibility(&ctx), {
            let mut expected = CredibilityRecord::neutral();
            expected.sources.push(ctx.note.clone().unwrap());
            expected
        });
        let engagement_record = engagement(&ctx);
        assert_eq!(engagement_record.sentiment, 0.0);
        assert!(engagement_record.source_label.contains("failed"));
    }
}
