//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};

/// Initializes the HTTP client used for all backend calls.
///
/// Configured with the per-request timeout from the config and the client's
/// User-Agent. The timeout is the only hang protection in the system: the
/// client enforces no separate deadline per protocol phase, so a hung
/// backend call fails here rather than wedging the analysis.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }
}
