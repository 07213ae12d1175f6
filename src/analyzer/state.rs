//! Analysis state machine.
//!
//! The two-phase protocol moves through a small set of conceptual states:
//!
//! ```text
//! Idle --submit--> InFlight --phase1 ok--> ProgressiveLoaded
//!     InFlight --phase1 fail--> Failed
//!     ProgressiveLoaded --phase2 ok--> Complete
//!     ProgressiveLoaded --phase2 fail--> PartialFailure
//! ```
//!
//! A new submission from any state starts over at `InFlight`;
//! responses belonging to a superseded submission are discarded by the
//! orchestrator's generation guard.

use crate::models::AnalysisResult;

/// Phase of the two-phase analysis protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// No analysis has been started
    Idle,
    /// Request issued, nothing received yet; covers both the progressive
    /// flow's phase-1 request and the single-shot full analysis
    InFlight,
    /// Phase-1 results available, DKIM completion outstanding
    ProgressiveLoaded,
    /// Phase-2 merged; final result available
    Complete,
    /// Phase-2 failed; phase-1 results retained with DKIM marked as error
    PartialFailure,
    /// Phase-1 itself failed; no result at all
    Failed,
}

impl AnalysisPhase {
    /// Whether this phase ends an analysis run.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AnalysisPhase::Complete | AnalysisPhase::PartialFailure | AnalysisPhase::Failed
        )
    }
}

/// A point-in-time view of the orchestrator state: the single source of
/// truth for what gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSnapshot {
    /// Current protocol phase
    pub phase: AnalysisPhase,
    /// The normalized domain under analysis, once known
    pub domain: Option<String>,
    /// The accumulated result; `None` until phase 1 resolves and always
    /// `None` in `Failed`
    pub result: Option<AnalysisResult>,
    /// User-facing error text; set only in `Failed`
    pub error: Option<String>,
}

impl AnalysisSnapshot {
    pub(crate) fn in_flight(domain: String) -> Self {
        Self {
            phase: AnalysisPhase::InFlight,
            domain: Some(domain),
            result: None,
            error: None,
        }
    }

    pub(crate) fn with_result(phase: AnalysisPhase, result: AnalysisResult) -> Self {
        Self {
            phase,
            domain: Some(result.domain.clone()),
            result: Some(result),
            error: None,
        }
    }

    pub(crate) fn failed(domain: Option<String>, error: String) -> Self {
        Self {
            phase: AnalysisPhase::Failed,
            domain,
            result: None,
            error: Some(error),
        }
    }
}

impl Default for AnalysisSnapshot {
    fn default() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            domain: None,
            result: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!AnalysisPhase::Idle.is_terminal());
        assert!(!AnalysisPhase::InFlight.is_terminal());
        assert!(!AnalysisPhase::ProgressiveLoaded.is_terminal());
        assert!(AnalysisPhase::Complete.is_terminal());
        assert!(AnalysisPhase::PartialFailure.is_terminal());
        assert!(AnalysisPhase::Failed.is_terminal());
    }

    #[test]
    fn test_default_snapshot_is_idle() {
        let snapshot = AnalysisSnapshot::default();
        assert_eq!(snapshot.phase, AnalysisPhase::Idle);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_failed_snapshot_carries_error_only() {
        let snapshot = AnalysisSnapshot::failed(Some("x.com".into()), "boom".into());
        assert_eq!(snapshot.phase, AnalysisPhase::Failed);
        assert!(snapshot.result.is_none());
        assert_eq!(snapshot.error.as_deref(), Some("boom"));
    }
}
