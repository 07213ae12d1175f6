//! The domain analysis orchestrator.
//!
//! [`Analyzer`] drives the two-phase protocol against the backend and owns
//! the single source of truth for what gets rendered: an
//! [`AnalysisSnapshot`] guarded by a request generation counter. Auxiliary
//! flows (platform statistics, email reports) live here too but write to
//! disjoint state and never interfere with the main analysis.

mod merge;
mod state;

pub use merge::{apply_phase1, apply_phase2, apply_phase2_failure};
pub use state::{AnalysisPhase, AnalysisSnapshot};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::{debug, info, warn};

use crate::api::ApiClient;
use crate::domain::normalize_domain;
use crate::models::{EmailReportRequest, Statistics};

/// Drives domain analyses and holds the current [`AnalysisSnapshot`].
///
/// Re-entrant: a new [`analyze`](Analyzer::analyze) call supersedes any
/// in-flight one. In-flight requests are not aborted, but their responses
/// are discarded once a newer submission has bumped the generation counter,
/// so a stale phase-2 response can never overwrite a newer run's state.
pub struct Analyzer {
    client: ApiClient,
    phase_delay: Duration,
    generation: AtomicU64,
    snapshot: Mutex<AnalysisSnapshot>,
}

impl Analyzer {
    /// Creates an analyzer over the given API client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            phase_delay: Duration::ZERO,
            generation: AtomicU64::new(0),
            snapshot: Mutex::new(AnalysisSnapshot::default()),
        }
    }

    /// Sets a pause between publishing phase-1 results and issuing the
    /// phase-2 request. Purely presentational pacing; defaults to none.
    pub fn with_phase_delay(mut self, delay: Duration) -> Self {
        self.phase_delay = delay;
        self
    }

    /// The current state snapshot.
    pub fn snapshot(&self) -> AnalysisSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs the two-phase analysis for `input`, returning the final
    /// snapshot. Equivalent to [`analyze_with`](Analyzer::analyze_with)
    /// without an observer.
    pub async fn analyze(&self, input: &str) -> AnalysisSnapshot {
        self.analyze_with(input, |_| {}).await
    }

    /// Runs the two-phase analysis, invoking `on_update` at every published
    /// state transition (in-flight, progressive results, terminal state).
    ///
    /// Errors never escape as `Err`: phase-1 failures land in the snapshot
    /// as `Failed` with a user-facing message, and phase-2 failures degrade
    /// to `PartialFailure` with the phase-1 components intact.
    pub async fn analyze_with<F>(&self, input: &str, mut on_update: F) -> AnalysisSnapshot
    where
        F: FnMut(&AnalysisSnapshot),
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(domain) = normalize_domain(input) else {
            let snapshot =
                AnalysisSnapshot::failed(None, "Please enter a domain name".to_string());
            self.publish(generation, snapshot, &mut on_update);
            return self.snapshot();
        };

        info!("Starting progressive analysis for domain: {domain}");
        self.publish(
            generation,
            AnalysisSnapshot::in_flight(domain.clone()),
            &mut on_update,
        );

        // Phase 1: fast MX/SPF/DMARC results with a DKIM placeholder.
        let phase1 = match self.client.check_progressive(&domain).await {
            Ok(payload) => apply_phase1(payload),
            Err(e) => {
                warn!("Progressive check failed for {domain}: {e}");
                let message = format!("Error checking domain: {}", e.user_message());
                self.publish(
                    generation,
                    AnalysisSnapshot::failed(Some(domain), message),
                    &mut on_update,
                );
                return self.snapshot();
            }
        };

        let published = self.publish(
            generation,
            AnalysisSnapshot::with_result(AnalysisPhase::ProgressiveLoaded, phase1.clone()),
            &mut on_update,
        );
        if !published {
            // Superseded while phase 1 was in flight; skip phase 2 entirely.
            return self.snapshot();
        }

        if !self.phase_delay.is_zero() {
            tokio::time::sleep(self.phase_delay).await;
        }

        // Phase 2: DKIM completion, merged into the phase-1 result.
        let snapshot = match self.client.complete_dkim(&domain).await {
            Ok(completion) => {
                info!(
                    "DKIM completion for {domain}: {} selectors checked",
                    completion.dkim.selectors_checked.unwrap_or(0)
                );
                AnalysisSnapshot::with_result(
                    AnalysisPhase::Complete,
                    apply_phase2(&phase1, &completion),
                )
            }
            Err(e) => {
                warn!("DKIM completion failed for {domain}: {e}");
                AnalysisSnapshot::with_result(
                    AnalysisPhase::PartialFailure,
                    apply_phase2_failure(&phase1),
                )
            }
        };
        self.publish(generation, snapshot, &mut on_update);
        self.snapshot()
    }

    /// Runs a single-shot full analysis (no progressive phase).
    pub async fn analyze_full<F>(&self, input: &str, mut on_update: F) -> AnalysisSnapshot
    where
        F: FnMut(&AnalysisSnapshot),
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(domain) = normalize_domain(input) else {
            let snapshot =
                AnalysisSnapshot::failed(None, "Please enter a domain name".to_string());
            self.publish(generation, snapshot, &mut on_update);
            return self.snapshot();
        };

        info!("Starting full analysis for domain: {domain}");
        self.publish(
            generation,
            AnalysisSnapshot::in_flight(domain.clone()),
            &mut on_update,
        );

        let snapshot = match self.client.check_full(&domain).await {
            Ok(payload) => {
                AnalysisSnapshot::with_result(AnalysisPhase::Complete, apply_phase1(payload))
            }
            Err(e) => {
                warn!("Full check failed for {domain}: {e}");
                let message = format!("Error checking domain: {}", e.user_message());
                AnalysisSnapshot::failed(Some(domain), message)
            }
        };
        self.publish(generation, snapshot, &mut on_update);
        self.snapshot()
    }

    /// Fetches public platform statistics.
    ///
    /// An independent failure domain: any error is logged and swallowed so
    /// it can never set the analysis error or block the main flow. Safe to
    /// run concurrently with an analysis.
    pub async fn load_statistics(&self) -> Option<Statistics> {
        match self.client.public_statistics().await {
            Ok(envelope) if envelope.success => envelope.data,
            Ok(envelope) => {
                warn!(
                    "Statistics endpoint reported failure: {}",
                    envelope.error.as_deref().unwrap_or("unknown error")
                );
                None
            }
            Err(e) => {
                warn!("Failed to load statistics: {e}");
                None
            }
        }
    }

    /// Sends the current analysis result to `email` as a report.
    ///
    /// The only client-side validation is non-emptiness of the address; a
    /// result must be present from a prior analysis. Returns the backend's
    /// confirmation message.
    pub async fn send_email_report(&self, email: &str, opt_in_marketing: bool) -> Result<String> {
        let email = email.trim();
        if email.is_empty() {
            bail!("Please enter an email address");
        }
        let result = self
            .snapshot()
            .result
            .context("No analysis result available to send")?;

        let request = EmailReportRequest {
            email: email.to_string(),
            domain: result.domain.clone(),
            analysis_result: result,
            opt_in_marketing,
            timestamp: Utc::now(),
        };
        let response = self
            .client
            .send_email_report(&request)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;

        if response.success {
            Ok(response
                .message
                .unwrap_or_else(|| "Email report sent successfully".to_string()))
        } else {
            bail!(response
                .error
                .unwrap_or_else(|| "Failed to send email".to_string()))
        }
    }

    /// Stores `snapshot` and notifies the observer, unless a newer
    /// submission has superseded `generation`. Returns whether the
    /// snapshot was accepted.
    ///
    /// The generation comparison happens under the snapshot lock, making
    /// check and store a single critical section. A newer run bumps the
    /// counter before its first publish, so the last write to the snapshot
    /// always belongs to the newest generation.
    fn publish<F>(&self, generation: u64, snapshot: AnalysisSnapshot, on_update: &mut F) -> bool
    where
        F: FnMut(&AnalysisSnapshot),
    {
        {
            let mut guard = self
                .snapshot
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!(
                    "Discarding stale response for superseded analysis (generation {generation})"
                );
                return false;
            }
            *guard = snapshot.clone();
        }
        on_update(&snapshot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        // Points at a closed port; tests below never reach the network.
        Analyzer::new(ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn test_empty_domain_fails_without_network() {
        let analyzer = analyzer();
        let snapshot = analyzer.analyze("   ").await;
        assert_eq!(snapshot.phase, AnalysisPhase::Failed);
        assert_eq!(snapshot.error.as_deref(), Some("Please enter a domain name"));
        assert!(snapshot.result.is_none());
    }

    #[tokio::test]
    async fn test_empty_email_rejected_before_send() {
        let analyzer = analyzer();
        let err = analyzer.send_email_report("  ", false).await.unwrap_err();
        assert!(err.to_string().contains("email address"));
    }

    #[tokio::test]
    async fn test_email_report_requires_a_result() {
        let analyzer = analyzer();
        let err = analyzer
            .send_email_report("user@example.com", false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No analysis result"));
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_idle() {
        let analyzer = analyzer();
        assert_eq!(analyzer.snapshot().phase, AnalysisPhase::Idle);
    }

    #[test]
    fn test_concurrent_publish_last_write_belongs_to_newest_generation() {
        // An older run's publish racing a newer run's bump-and-publish must
        // never leave the older snapshot as the final state, no matter how
        // the threads interleave. Check-then-store has to be atomic for
        // this to hold; a window between the generation check and the store
        // would let the older snapshot land last.
        let client = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:1");
        for _ in 0..200 {
            let analyzer = std::sync::Arc::new(Analyzer::new(client.clone()));
            analyzer.generation.store(1, Ordering::SeqCst);

            let older = std::sync::Arc::clone(&analyzer);
            let handle = std::thread::spawn(move || {
                older.publish(
                    1,
                    AnalysisSnapshot::in_flight("stale.example".into()),
                    &mut |_: &AnalysisSnapshot| {},
                );
            });

            analyzer.generation.store(2, Ordering::SeqCst);
            analyzer.publish(
                2,
                AnalysisSnapshot::in_flight("fresh.example".into()),
                &mut |_: &AnalysisSnapshot| {},
            );
            handle.join().expect("publisher thread");

            assert_eq!(
                analyzer.snapshot().domain.as_deref(),
                Some("fresh.example")
            );
        }
    }

    #[tokio::test]
    async fn test_stale_publish_is_discarded() {
        let analyzer = analyzer();
        let mut seen = Vec::new();
        // Generation 1 is superseded before it publishes anything.
        analyzer.generation.store(2, Ordering::SeqCst);
        let accepted = analyzer.publish(
            1,
            AnalysisSnapshot::failed(None, "stale".into()),
            &mut |s: &AnalysisSnapshot| seen.push(s.phase),
        );
        assert!(!accepted);
        assert!(seen.is_empty());
        assert_eq!(analyzer.snapshot().phase, AnalysisPhase::Idle);
    }
}
