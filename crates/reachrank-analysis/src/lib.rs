//! Multi-source metric aggregation and scoring engine.
//!
//! Normalizes raw per-platform statistics into 0–100 sub-metrics, merges
//! records from zero, one, or two platforms per category under fixed
//! combination rules, and reduces the combined records into a weighted
//! composite scorecard. Provider failures degrade the affected category to
//! its neutral record with a provenance note; they never abort a run.

pub mod combine;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod records;
pub mod scorecard;

mod normalize;

pub use error::AnalysisError;
pub use pipeline::{run_analysis, ProviderSet};
pub use records::{
    AnalysisReport, CredibilityRecord, EngagementRecord, PeakMoment, PersonaRecord, PersonaType,
    ScorecardRecord, SourceWeights, TimelineRecord,
};
