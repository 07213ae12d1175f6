//! Application configuration and constants.
//!
//! This module provides:
//! - Endpoint paths, scoring parameters, and operational limits
//! - Environment selection (production/staging/local)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Environment, LogFormat, LogLevel};
