//! CLI options and the library-facing configuration type.
//!
//! [`Config`] is both the clap surface of the binary and a plain struct a
//! library embedder can fill in by hand.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_PHASE_DELAY_MS, DEFAULT_TIMEOUT_SECS, LOCAL_API_BASE_URL, LOCAL_APP_BASE_URL,
    PRODUCTION_API_BASE_URL, PRODUCTION_APP_BASE_URL, STAGING_API_BASE_URL, STAGING_APP_BASE_URL,
};

/// Verbosity threshold for log output.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational detail
    Info,
    /// Verbose diagnostics, including per-request detail
    Debug,
    /// Everything the crate can emit
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How log lines are rendered.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-oriented lines (the default)
    Plain,
    /// One JSON object per line, for log collectors
    Json,
}

/// Backend environment to talk to.
///
/// The base URL is selected explicitly by the caller rather than sniffed from
/// the runtime environment, so the same binary can target any deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// The hosted production backend
    Production,
    /// The staging backend
    Staging,
    /// A locally running backend (localhost:8080)
    Local,
}

impl Environment {
    /// Backend API base URL for this environment.
    pub fn api_base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_API_BASE_URL,
            Environment::Staging => STAGING_API_BASE_URL,
            Environment::Local => LOCAL_API_BASE_URL,
        }
    }

    /// Hosted frontend base URL, used for shareable analysis links.
    pub fn app_base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_APP_BASE_URL,
            Environment::Staging => STAGING_APP_BASE_URL,
            Environment::Local => LOCAL_APP_BASE_URL,
        }
    }
}

/// Configuration for an analysis run. Doubles as the CLI surface.
///
/// Can be constructed programmatically for library use:
///
/// ```
/// use astraverify::Config;
///
/// let config = Config {
///     domain: Some("example.com".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "astraverify",
    version,
    about = "Check a domain's MX/SPF/DKIM/DMARC records and email security score"
)]
pub struct Config {
    /// Domain to analyze, or a shared analysis link containing ?domain=
    pub domain: Option<String>,

    /// Backend environment to talk to
    #[arg(long, value_enum, default_value = "production")]
    pub environment: Environment,

    /// Override the backend base URL (takes precedence over --environment)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Run a single full analysis instead of the two-phase progressive flow
    #[arg(long)]
    pub no_progressive: bool,

    /// Email address to send the report to after the analysis completes
    #[arg(long)]
    pub email: Option<String>,

    /// Opt in to product update emails when sending a report
    #[arg(long)]
    pub opt_in_marketing: bool,

    /// Also fetch and display platform statistics
    #[arg(long)]
    pub stats: bool,

    /// Probe backend health and exit
    #[arg(long)]
    pub health: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pause in milliseconds between phase-1 display and the DKIM completion request
    #[arg(long, default_value_t = DEFAULT_PHASE_DELAY_MS)]
    pub phase_delay_ms: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            environment: Environment::Production,
            api_base_url: None,
            no_progressive: false,
            email: None,
            opt_in_marketing: false,
            stats: false,
            health: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            phase_delay_ms: DEFAULT_PHASE_DELAY_MS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Backend base URL after applying the `--api-base-url` override.
    pub fn resolved_api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| self.environment.api_base_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_environment_base_urls() {
        assert!(Environment::Production.api_base_url().starts_with("https://"));
        assert!(Environment::Staging.api_base_url().starts_with("https://"));
        assert_eq!(Environment::Local.api_base_url(), "http://localhost:8080");
        assert_ne!(
            Environment::Production.api_base_url(),
            Environment::Staging.api_base_url()
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.phase_delay_ms, DEFAULT_PHASE_DELAY_MS);
        assert!(!config.no_progressive);
        assert!(!config.stats);
        assert!(config.domain.is_none());
    }

    #[test]
    fn test_resolved_api_base_url_override() {
        let config = Config {
            api_base_url: Some("http://127.0.0.1:9999".into()),
            ..Default::default()
        };
        assert_eq!(config.resolved_api_base_url(), "http://127.0.0.1:9999");

        let config = Config {
            environment: Environment::Staging,
            ..Default::default()
        };
        assert_eq!(config.resolved_api_base_url(), STAGING_API_BASE_URL);
    }
}
