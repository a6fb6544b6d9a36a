//! Plain-text rendering of an analysis report.

use std::fmt::Write;

use reachrank_analysis::AnalysisReport;

const ELITE_THRESHOLD: f64 = 80.0;

/// Peak moments shown per report.
const MAX_PEAKS_SHOWN: usize = 5;

/// Render the full report as text panels, sub-metrics to two decimals.
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();

    section(&mut out, "Persona");
    line(&mut out, "Name", &report.persona.name);
    line(&mut out, "Type", &report.persona.persona_type.to_string());
    line(
        &mut out,
        "Followers",
        &report.persona.follower_count.to_string(),
    );
    line(
        &mut out,
        "Account age",
        &format!("{} years", report.persona.account_age_years),
    );
    line(
        &mut out,
        "Total views",
        &report.persona.total_views.to_string(),
    );
    line(&mut out, "Bio", &report.persona.bio);
    line(&mut out, "Source", &report.persona.source_label);

    let c = &report.credibility;
    section(&mut out, "Credibility");
    metric(&mut out, "News authority", c.news_authority);
    metric(&mut out, "Web presence", c.web_presence);
    metric(&mut out, "Consistency", c.consistency);
    metric(&mut out, "Content quality", c.content_quality);
    metric(&mut out, "Peer review", c.peer_review);
    metric(&mut out, "Authority links", c.authority_links);
    metric(&mut out, "Originality", c.originality);
    metric(&mut out, "Verified", c.verified);
    metric(&mut out, "Audience overlap", c.audience_overlap);
    line(&mut out, "Cross-verified", yes_no(c.cross_verified));
    line(&mut out, "Spam flag", yes_no(c.spam_flag));
    line(&mut out, "Sources", &c.sources.join(", "));

    let t = &report.timeline;
    section(&mut out, "Timeline");
    metric(&mut out, "Longevity", t.longevity);
    metric(&mut out, "Trend momentum", t.trend_momentum);
    metric(&mut out, "Decay rate", t.decay_rate);
    metric(&mut out, "Buzz", t.buzz);
    metric(&mut out, "Consistency over time", t.consistency_over_time);
    metric(&mut out, "Legacy impact", t.legacy_impact);
    metric(&mut out, "Volatility", t.volatility);
    metric(&mut out, "Seasonal filter", t.seasonal_filter);
    metric(&mut out, "Evolution", t.evolution);
    metric(&mut out, "Retention longevity", t.retention_longevity);
    for milestone in &t.milestones {
        line(&mut out, "Milestone", milestone);
    }
    for peak in t.peak_moments.iter().take(MAX_PEAKS_SHOWN) {
        line(
            &mut out,
            "Peak",
            &format!("{} ({} views)", peak.date, peak.views),
        );
    }
    line(&mut out, "Source", &t.source_label);

    let e = &report.engagement;
    section(&mut out, "Engagement");
    metric(&mut out, "Rate", e.rate);
    metric(&mut out, "Sentiment", e.sentiment);
    metric(&mut out, "Reach amplifier", e.reach_amplifier);
    metric(&mut out, "Retention index", e.retention_index);
    metric(&mut out, "Comment quality", e.comment_quality);
    metric(&mut out, "Growth rate", e.growth_rate);
    metric(&mut out, "Viral spikes", e.viral_spikes);
    metric(&mut out, "Social echo", e.social_echo);
    metric(&mut out, "Depth ratio", e.depth_ratio);
    metric(&mut out, "Authenticity", e.authenticity);
    metric(&mut out, "Engagement decay", e.engagement_decay);
    metric(&mut out, "Trend relevance", e.trend_relevance);
    if !e.trend_series.is_empty() {
        let series: Vec<String> = e.trend_series.iter().map(|v| format!("{v:.2}")).collect();
        line(&mut out, "Trend series", &series.join(", "));
    }
    if !e.heatmap_series.is_empty() {
        let series: Vec<String> = e.heatmap_series.iter().map(ToString::to_string).collect();
        line(&mut out, "View heatmap", &series.join(", "));
    }
    line(&mut out, "Source", &e.source_label);

    let s = &report.scorecard;
    section(&mut out, "Scorecard");
    metric(&mut out, "Credibility score", s.credibility_score);
    metric(&mut out, "Longevity score", s.longevity_score);
    metric(&mut out, "Engagement score", s.engagement_score);
    metric(&mut out, "Total score", s.total_score);
    line(&mut out, "Tier", tier(s.total_score));
    line(
        &mut out,
        "Source weights",
        &format!(
            "youtube {:.0}%, instagram {:.0}%, news {:.0}%, web search {:.0}%",
            s.source_weights.youtube,
            s.source_weights.instagram,
            s.source_weights.news,
            s.source_weights.web_search
        ),
    );

    out
}

fn tier(total: f64) -> &'static str {
    if total > ELITE_THRESHOLD {
        "Elite"
    } else {
        "Rising"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "== {title} ==");
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label}: {value}");
}

fn metric(out: &mut String, label: &str, value: f64) {
    let _ = writeln!(out, "  {label}: {value:.2}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use reachrank_analysis::{
        CredibilityRecord, EngagementRecord, PeakMoment, PersonaRecord, ScorecardRecord,
        SourceWeights, TimelineRecord,
    };

    fn sample_report(total_score: f64) -> AnalysisReport {
        AnalysisReport {
            persona: PersonaRecord::neutral(),
            credibility: CredibilityRecord {
                news_authority: 33.333,
                ..CredibilityRecord::neutral()
            },
            timeline: TimelineRecord::neutral(),
            engagement: EngagementRecord::neutral(),
            scorecard: ScorecardRecord {
                credibility_score: 10.0,
                longevity_score: 20.0,
                engagement_score: 30.0,
                total_score,
                source_weights: SourceWeights {
                    youtube: 100.0,
                    instagram: 0.0,
                    news: 20.0,
                    web_search: 20.0,
                },
            },
        }
    }

    #[test]
    fn metrics_render_to_two_decimals() {
        let rendered = render(&sample_report(19.0));
        assert!(rendered.contains("News authority: 33.33"));
        assert!(rendered.contains("Total score: 19.00"));
    }

    #[test]
    fn tier_line_splits_at_the_elite_threshold() {
        assert!(render(&sample_report(85.0)).contains("Tier: Elite"));
        assert!(render(&sample_report(80.0)).contains("Tier: Rising"));
    }

    #[test]
    fn at_most_five_peak_moments_render() {
        let mut report = sample_report(19.0);
        report.timeline.peak_moments = (0..8u64)
            .map(|i| PeakMoment {
                date: format!("2025-08-{:02}", i + 1),
                views: 1000 * (8 - i),
            })
            .collect();
        let rendered = render(&report);
        assert_eq!(rendered.matches("Peak:").count(), 5);
        // Most recent peaks win, older ones are cut.
        assert!(rendered.contains("2025-08-05"));
        assert!(!rendered.contains("2025-08-06"));
    }

    #[test]
    fn every_panel_is_present() {
        let rendered = render(&sample_report(19.0));
        for panel in ["Persona", "Credibility", "Timeline", "Engagement", "Scorecard"] {
            assert!(rendered.contains(&format!("== {panel} ==")), "{panel}");
        }
    }
}
