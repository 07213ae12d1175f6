//! Startup initialization helpers.
//!
//! HTTP client and logger construction, shared by the CLI binary and any
//! library embedder.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
