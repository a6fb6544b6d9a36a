use thiserror::Error;

/// Errors surfaced by the analysis orchestrator.
///
/// Provider failures are *not* represented here: normalizers convert them
/// into neutral records with provenance notes.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Neither platform input was supplied.
    #[error("no platform input supplied; provide at least one identifier")]
    NoInput,

    /// A malformed record reached the scorecard calculator. Indicates an
    /// internal bug, not a runtime data issue; aborts the current run only.
    #[error("contract violation: {0}")]
    Contract(String),
}
