//! Derived metric calculators.
//!
//! Pure numeric functions turning raw per-item statistics into 0–100
//! sub-metrics. Item slices are most-recent-first, as the providers return
//! them. Degenerate inputs (zero or one item, zero denominators) yield
//! `0.0` rather than a division error; every result is clamped to
//! `[0, 100]`.

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use reachrank_providers::MediaItem;

/// Keywords whose presence in a title marks content as trend-relevant.
const TREND_KEYWORDS: &[&str] = &["ai", "tech", "2025"];

/// Fixed denominator for the lexical-diversity proxy.
const ORIGINALITY_WORD_BASE: f64 = 50.0;

/// Clamp a sub-metric into `[0, 100]`, mapping NaN to zero.
#[must_use]
pub fn clamp_metric(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Inverse of the variance of inter-publish intervals: lower variance means
/// a steadier schedule and a higher score. Requires at least two items.
#[must_use]
pub fn consistency(items: &[MediaItem]) -> f64 {
    if items.len() < 2 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let timestamps: Vec<f64> = items
        .iter()
        .map(|item| item.published_at.timestamp_millis() as f64)
        .collect();
    let intervals: Vec<f64> = timestamps.windows(2).map(|w| w[0] - w[1]).collect();
    #[allow(clippy::cast_precision_loss)]
    let count = intervals.len() as f64;
    let mean = intervals.iter().sum::<f64>() / count;
    let variance = intervals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    clamp_metric(100.0 - variance / 1e8)
}

/// Mean like-to-view ratio scaled by a fixed multiplier.
#[must_use]
pub fn content_quality(items: &[MediaItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean_ratio = items
        .iter()
        .map(|item| item.like_count as f64 / item.view_count.max(1) as f64)
        .sum::<f64>()
        / items.len() as f64;
    clamp_metric(mean_ratio * 100.0 * 20.0)
}

/// Distinct words across all titles against a fixed base — a coarse
/// lexical-diversity proxy, not semantic analysis.
#[must_use]
pub fn originality(items: &[MediaItem]) -> f64 {
    let distinct: HashSet<&str> = items
        .iter()
        .flat_map(|item| item.title.split_whitespace())
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let count = distinct.len() as f64;
    clamp_metric(count / ORIGINALITY_WORD_BASE * 100.0)
}

/// 50 when any single calendar month holds more than five items (seasonal
/// clustering), else 100.
#[must_use]
pub fn seasonal_filter(items: &[MediaItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let mut month_counts: HashMap<u32, u32> = HashMap::new();
    for item in items {
        *month_counts.entry(item.published_at.month()).or_insert(0) += 1;
    }
    if month_counts.values().any(|&count| count > 5) {
        50.0
    } else {
        100.0
    }
}

/// 100 minus the fraction of words the earliest five titles share with the
/// most recent five: higher means more thematic change over time.
#[must_use]
pub fn evolution(items: &[MediaItem]) -> f64 {
    // Items arrive newest-first, so the earliest titles sit at the tail.
    let earliest_words: Vec<&str> = items
        .iter()
        .rev()
        .take(5)
        .flat_map(|item| item.title.split_whitespace())
        .collect();
    if earliest_words.is_empty() {
        return 0.0;
    }
    let recent_words: HashSet<&str> = items
        .iter()
        .take(5)
        .flat_map(|item| item.title.split_whitespace())
        .collect();
    let shared = earliest_words
        .iter()
        .filter(|word| recent_words.contains(**word))
        .count();
    #[allow(clippy::cast_precision_loss)]
    let overlap = shared as f64 / earliest_words.len() as f64;
    clamp_metric((1.0 - overlap) * 100.0)
}

/// Item count times ten, capped — a crude volume proxy.
#[must_use]
pub fn retention_longevity(items: &[MediaItem]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = items.len() as f64;
    clamp_metric(count * 10.0)
}

/// Total comments over total likes; zero when nothing was liked.
#[must_use]
pub fn depth_ratio(items: &[MediaItem]) -> f64 {
    let total_likes: u64 = items.iter().map(|item| item.like_count).sum();
    if total_likes == 0 {
        return 0.0;
    }
    let total_comments: u64 = items.iter().map(|item| item.comment_count).sum();
    #[allow(clippy::cast_precision_loss)]
    let ratio = total_comments as f64 / total_likes as f64;
    clamp_metric(ratio * 100.0)
}

/// 50 when the mean view-to-comment ratio exceeds 1000 (suspiciously low
/// comment density), else 100.
#[must_use]
pub fn authenticity(items: &[MediaItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean_ratio = items
        .iter()
        .map(|item| item.view_count as f64 / item.comment_count.max(1) as f64)
        .sum::<f64>()
        / items.len() as f64;
    if mean_ratio > 1000.0 {
        50.0
    } else {
        100.0
    }
}

/// Ratio of the oldest five items' total views to the newest five items'
/// total views. The raw ratio may exceed 100 for back-catalog-heavy
/// channels; only the 100 ceiling applies.
#[must_use]
pub fn engagement_decay(items: &[MediaItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let oldest: u64 = items
        .iter()
        .rev()
        .take(5)
        .map(|item| item.view_count)
        .sum();
    let newest: u64 = items.iter().take(5).map(|item| item.view_count).sum();
    #[allow(clippy::cast_precision_loss)]
    let ratio = oldest as f64 / newest.max(1) as f64;
    clamp_metric(ratio * 100.0)
}

/// 50 when any title mentions a trend keyword, else 0.
#[must_use]
pub fn trend_relevance(items: &[MediaItem]) -> f64 {
    let hit = items.iter().any(|item| {
        let title = item.title.to_lowercase();
        TREND_KEYWORDS.iter().any(|keyword| title.contains(keyword))
    });
    if hit {
        50.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn item(days_ago: i64, title: &str, views: u64, likes: u64, comments: u64) -> MediaItem {
        let base = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        MediaItem {
            title: title.to_owned(),
            description: String::new(),
            published_at: base - Duration::days(days_ago),
            view_count: views,
            like_count: likes,
            comment_count: comments,
        }
    }

    /// A steady weekly schedule, newest first.
    fn weekly_items(count: i64) -> Vec<MediaItem> {
        (0..count)
            .map(|i| item(i * 7, &format!("video number {i}"), 1000, 50, 10))
            .collect()
    }

    #[test]
    fn every_calculator_returns_zero_for_empty_input() {
        let items: Vec<MediaItem> = Vec::new();
        assert_eq!(consistency(&items), 0.0);
        assert_eq!(content_quality(&items), 0.0);
        assert_eq!(originality(&items), 0.0);
        assert_eq!(seasonal_filter(&items), 0.0);
        assert_eq!(evolution(&items), 0.0);
        assert_eq!(retention_longevity(&items), 0.0);
        assert_eq!(depth_ratio(&items), 0.0);
        assert_eq!(authenticity(&items), 0.0);
        assert_eq!(engagement_decay(&items), 0.0);
        assert_eq!(trend_relevance(&items), 0.0);
    }

    #[test]
    fn consistency_requires_two_items() {
        let single = vec![item(0, "only one", 100, 10, 1)];
        assert_eq!(consistency(&single), 0.0);
    }

    #[test]
    fn perfectly_regular_schedule_scores_full_consistency() {
        let items = weekly_items(10);
        assert_eq!(consistency(&items), 100.0);
    }

    #[test]
    fn erratic_schedule_scores_below_regular() {
        let regular = weekly_items(6);
        let erratic = vec![
            item(0, "a", 100, 10, 1),
            item(1, "b", 100, 10, 1),
            item(60, "c", 100, 10, 1),
            item(61, "d", 100, 10, 1),
            item(180, "e", 100, 10, 1),
            item(181, "f", 100, 10, 1),
        ];
        assert!(consistency(&erratic) < consistency(&regular));
    }

    #[test]
    fn content_quality_scales_like_ratio() {
        // 2% likes-per-view → 0.02 * 100 * 20 = 40
        let items = vec![item(0, "a", 1000, 20, 5), item(7, "b", 1000, 20, 5)];
        let quality = content_quality(&items);
        assert!((quality - 40.0).abs() < 1e-9, "got {quality}");
    }

    #[test]
    fn content_quality_tolerates_zero_views() {
        let items = vec![item(0, "a", 0, 10, 0)];
        let quality = content_quality(&items);
        assert!(quality.is_finite());
        assert_eq!(quality, 100.0, "10 likes over floored 1 view clamps");
    }

    #[test]
    fn originality_counts_distinct_words() {
        // 10 distinct words / 50 * 100 = 20
        let items = vec![
            item(0, "one two three four five", 100, 10, 1),
            item(7, "six seven eight nine ten", 100, 10, 1),
        ];
        assert!((originality(&items) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn originality_caps_at_hundred() {
        let items: Vec<MediaItem> = (0..20)
            .map(|i| {
                item(
                    i,
                    &format!("w{i}a w{i}b w{i}c w{i}d w{i}e"),
                    100,
                    10,
                    1,
                )
            })
            .collect();
        assert_eq!(originality(&items), 100.0);
    }

    #[test]
    fn seasonal_clustering_halves_the_filter() {
        // Seven items inside one month.
        let clustered: Vec<MediaItem> = (0..7).map(|i| item(i, "burst", 100, 10, 1)).collect();
        assert_eq!(seasonal_filter(&clustered), 50.0);

        let spread = weekly_items(10);
        assert_eq!(seasonal_filter(&spread), 100.0);
    }

    #[test]
    fn evolution_is_high_when_titles_diverge() {
        // Newest five about retro gaming, oldest five about quantum gardening.
        let mut items: Vec<MediaItem> = (0..5)
            .map(|i| item(i * 7, &format!("retro gaming episode {i}"), 100, 10, 1))
            .collect();
        items.extend(
            (0..5).map(|i| item(700 + i * 7, &format!("quantum gardening part {i}"), 100, 10, 1)),
        );
        let score = evolution(&items);
        assert!(score > 50.0, "divergent titles should score high, got {score}");
    }

    #[test]
    fn evolution_is_zero_when_titles_repeat() {
        let items: Vec<MediaItem> = (0..10).map(|i| item(i * 7, "same title", 100, 10, 1)).collect();
        assert_eq!(evolution(&items), 0.0);
    }

    #[test]
    fn retention_longevity_is_count_times_ten_capped() {
        assert_eq!(retention_longevity(&weekly_items(3)), 30.0);
        assert_eq!(retention_longevity(&weekly_items(15)), 100.0);
    }

    #[test]
    fn depth_ratio_is_zero_without_likes() {
        let items = vec![item(0, "a", 100, 0, 50)];
        assert_eq!(depth_ratio(&items), 0.0);
    }

    #[test]
    fn depth_ratio_is_comments_over_likes() {
        // 30 comments / 100 likes * 100 = 30
        let items = vec![item(0, "a", 1000, 60, 20), item(7, "b", 1000, 40, 10)];
        assert!((depth_ratio(&items) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn sparse_comments_halve_authenticity() {
        let suspicious = vec![item(0, "a", 100_000, 500, 10)];
        assert_eq!(authenticity(&suspicious), 50.0);

        let healthy = vec![item(0, "a", 1000, 100, 50)];
        assert_eq!(authenticity(&healthy), 100.0);
    }

    #[test]
    fn engagement_decay_clamps_at_ceiling_only() {
        // Oldest items dwarf the newest: raw ratio far above 100, clamps to 100.
        let mut items: Vec<MediaItem> = (0..5).map(|i| item(i, "new", 10, 1, 1)).collect();
        items.extend((5..10).map(|i| item(i * 30, "old", 1_000_000, 1, 1)));
        assert_eq!(engagement_decay(&items), 100.0);
    }

    #[test]
    fn engagement_decay_below_hundred_for_growing_channels() {
        let mut items: Vec<MediaItem> = (0..5).map(|i| item(i, "new", 10_000, 1, 1)).collect();
        items.extend((5..10).map(|i| item(i * 30, "old", 1_000, 1, 1)));
        // 5000 / 50000 * 100 = 10
        assert!((engagement_decay(&items) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn trend_keywords_mark_relevance() {
        let relevant = vec![item(0, "My AI workflow", 100, 10, 1)];
        assert_eq!(trend_relevance(&relevant), 50.0);

        let irrelevant = vec![item(0, "Sourdough basics", 100, 10, 1)];
        assert_eq!(trend_relevance(&irrelevant), 0.0);
    }

    #[test]
    fn clamp_metric_bounds_and_nan() {
        assert_eq!(clamp_metric(-5.0), 0.0);
        assert_eq!(clamp_metric(250.0), 100.0);
        assert_eq!(clamp_metric(f64::NAN), 0.0);
        assert_eq!(clamp_metric(42.5), 42.5);
    }
}
