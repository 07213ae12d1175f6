//! Pure merge functions for the two-phase protocol.
//!
//! The result is modeled as a value: each phase produces a new
//! [`AnalysisResult`] from the previous one instead of mutating shared
//! state. Phase 2 overwrites exactly the DKIM-related fields; everything
//! phase 1 established is carried through untouched.

use chrono::Utc;

use crate::models::{AnalysisResult, DkimCompletion};

/// Finalizes a phase-1 payload: stamps the client-side receipt time.
pub fn apply_phase1(mut payload: AnalysisResult) -> AnalysisResult {
    payload.analysis_timestamp = Some(Utc::now());
    payload
}

/// Merges a phase-2 completion into the phase-1 result.
///
/// Replaces `dkim`, `email_provider`, `security_score`, `recommendations`,
/// clears `progressive`, and sets the completion message. Idempotent for
/// identical completions: fields are overwritten, never accumulated.
pub fn apply_phase2(prior: &AnalysisResult, completion: &DkimCompletion) -> AnalysisResult {
    let mut next = prior.clone();
    next.dkim = completion.dkim.clone();
    next.email_provider = completion.email_provider.clone();
    next.security_score = Some(completion.security_score.clone());
    next.recommendations = completion.recommendations.clone();
    next.progressive = false;
    next.message = Some(format!(
        "Analysis complete! Checked {} DKIM selectors.",
        completion.dkim.selectors_checked.unwrap_or(0)
    ));
    next
}

/// Marks the DKIM section as failed while keeping every phase-1 field.
///
/// `progressive` is cleared here too, so a failed completion never leaves
/// spinner state alive next to the error badge.
pub fn apply_phase2_failure(prior: &AnalysisResult) -> AnalysisResult {
    let mut next = prior.clone();
    next.dkim.status = "Error".to_string();
    next.dkim.description = Some("DKIM check failed".to_string());
    next.dkim.checking = false;
    next.progressive = false;
    next
}
