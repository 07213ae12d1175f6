//! astraverify library: client for the AstraVerify domain analysis service.
//!
//! AstraVerify checks a domain's MX, SPF, DKIM, and DMARC records and
//! produces a 0-100 security score. All DNS work and scoring happens in the
//! hosted backend; this crate drives the backend's progressive two-phase
//! protocol (fast MX/SPF/DMARC results first, comprehensive DKIM completion
//! second), merges the responses, and derives presentation values such as
//! letter grades and per-component indicators.
//!
//! # Example
//!
//! ```no_run
//! use astraverify::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: Some("gmail.com".into()),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! if let Some(result) = &report.snapshot.result {
//!     println!("{} scored {:?}", result.domain,
//!              result.security_score.as_ref().map(|s| s.score));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analyzer;
pub mod api;
pub mod config;
pub mod domain;
pub mod initialization;
pub mod models;
pub mod output;
pub mod score;
pub mod share;

// Re-export public API
pub use analyzer::{Analyzer, AnalysisPhase, AnalysisSnapshot};
pub use api::{ApiClient, ApiError};
pub use config::{Config, Environment, LogFormat, LogLevel};
pub use run::{check_backend_health, run_analysis, AnalysisReport};

// Internal run module (drives a complete CLI-style analysis)
mod run {
    use std::time::Duration;

    use anyhow::{bail, Context, Result};
    use log::{error, info};

    use crate::analyzer::{AnalysisPhase, AnalysisSnapshot, Analyzer};
    use crate::api::ApiClient;
    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::models::{HealthStatus, Statistics};
    use crate::{output, share};

    /// Outcome of a full analysis run.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// The domain that was analyzed (backend-normalized)
        pub domain: String,
        /// Final orchestrator snapshot (`Complete` or `PartialFailure`)
        pub snapshot: AnalysisSnapshot,
        /// Platform statistics, when requested and available
        pub statistics: Option<Statistics>,
        /// Shareable frontend link for this analysis
        pub share_link: Option<String>,
        /// Backend confirmation message if an email report was sent
        pub email_confirmation: Option<String>,
    }

    /// Runs a complete analysis per the configuration: the progressive
    /// two-phase protocol (or a single full check), optional statistics,
    /// optional email report, and terminal rendering along the way.
    ///
    /// # Errors
    ///
    /// Returns an error when no domain was provided, when the HTTP client
    /// cannot be constructed, or when phase 1 of the analysis fails (the
    /// error message is user-facing and includes the HTTP status or
    /// connectivity hint). A phase-2 failure is not an error: the report
    /// carries a `PartialFailure` snapshot with the phase-1 components
    /// intact.
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport> {
        let input = config
            .domain
            .clone()
            .context("No domain provided. Pass a domain name or a shared analysis link.")?;
        // A pasted share link carries the domain in its query string.
        let input = share::domain_from_link(&input).unwrap_or(input);

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let api = ApiClient::new(http, config.resolved_api_base_url());
        info!("Using backend at {}", api.base_url());

        let analyzer = Analyzer::new(api)
            .with_phase_delay(Duration::from_millis(config.phase_delay_ms));

        let show_progressive = |snapshot: &AnalysisSnapshot| {
            if snapshot.phase == AnalysisPhase::ProgressiveLoaded {
                if let Some(result) = &snapshot.result {
                    output::print_progressive(result);
                }
            }
        };

        // Statistics are an independent flow and may run concurrently with
        // the analysis; they write to disjoint state.
        let statistics_future = async {
            if config.stats {
                analyzer.load_statistics().await
            } else {
                None
            }
        };
        let analysis_future = async {
            if config.no_progressive {
                analyzer.analyze_full(&input, show_progressive).await
            } else {
                analyzer.analyze_with(&input, show_progressive).await
            }
        };
        let (snapshot, statistics) = futures::join!(analysis_future, statistics_future);

        if snapshot.phase == AnalysisPhase::Failed {
            bail!(snapshot
                .error
                .unwrap_or_else(|| "Analysis failed".to_string()));
        }

        if let Some(result) = &snapshot.result {
            output::print_report(result);
        }
        if let Some(statistics) = &statistics {
            output::print_statistics(statistics);
        }

        let domain = snapshot
            .result
            .as_ref()
            .map(|r| r.domain.clone())
            .or_else(|| snapshot.domain.clone())
            .unwrap_or(input);

        let mut email_confirmation = None;
        if let Some(email) = &config.email {
            match analyzer
                .send_email_report(email, config.opt_in_marketing)
                .await
            {
                Ok(message) => {
                    println!("📧 {message}");
                    email_confirmation = Some(message);
                }
                Err(e) => {
                    error!("Failed to send email report: {e:#}");
                }
            }
        }

        let share_link = share::share_link(config.environment.app_base_url(), &domain);
        if let Some(link) = &share_link {
            println!("🔗 Shareable link: {link}");
        }

        Ok(AnalysisReport {
            domain,
            snapshot,
            statistics,
            share_link,
            email_confirmation,
        })
    }

    /// Probes backend liveness.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// probe fails.
    pub async fn check_backend_health(config: &Config) -> Result<HealthStatus> {
        let http = init_client(config).context("Failed to initialize HTTP client")?;
        let api = ApiClient::new(http, config.resolved_api_base_url());
        api.health()
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))
    }
}
