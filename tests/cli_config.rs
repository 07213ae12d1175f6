//! CLI argument parsing tests.

use clap::Parser;

use astraverify::{Config, Environment};

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["astraverify", "gmail.com"]).unwrap();
    assert_eq!(config.domain.as_deref(), Some("gmail.com"));
    assert_eq!(config.environment, Environment::Production);
    assert!(config.api_base_url.is_none());
    assert!(!config.no_progressive);
    assert!(!config.stats);
    assert!(!config.health);
    assert!(config.email.is_none());
    assert_eq!(config.timeout_seconds, 30);
    assert_eq!(config.phase_delay_ms, 0);
}

#[test]
fn test_environment_selection() {
    let config =
        Config::try_parse_from(["astraverify", "gmail.com", "--environment", "staging"]).unwrap();
    assert_eq!(config.environment, Environment::Staging);
    assert!(config.resolved_api_base_url().starts_with("https://"));

    let config =
        Config::try_parse_from(["astraverify", "gmail.com", "--environment", "local"]).unwrap();
    assert_eq!(config.resolved_api_base_url(), "http://localhost:8080");
}

#[test]
fn test_base_url_override_beats_environment() {
    let config = Config::try_parse_from([
        "astraverify",
        "gmail.com",
        "--environment",
        "staging",
        "--api-base-url",
        "http://127.0.0.1:9999",
    ])
    .unwrap();
    assert_eq!(config.resolved_api_base_url(), "http://127.0.0.1:9999");
}

#[test]
fn test_flags() {
    let config = Config::try_parse_from([
        "astraverify",
        "gmail.com",
        "--no-progressive",
        "--stats",
        "--email",
        "user@example.com",
        "--opt-in-marketing",
        "--phase-delay-ms",
        "250",
    ])
    .unwrap();
    assert!(config.no_progressive);
    assert!(config.stats);
    assert!(config.opt_in_marketing);
    assert_eq!(config.email.as_deref(), Some("user@example.com"));
    assert_eq!(config.phase_delay_ms, 250);
}

#[test]
fn test_health_needs_no_domain() {
    let config = Config::try_parse_from(["astraverify", "--health"]).unwrap();
    assert!(config.health);
    assert!(config.domain.is_none());
}

#[test]
fn test_invalid_environment_is_rejected() {
    assert!(Config::try_parse_from(["astraverify", "gmail.com", "--environment", "qa"]).is_err());
}
