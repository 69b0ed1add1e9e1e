//! Error types and retry policy for upstream calls.
//!
//! The service distinguishes three failure classes at the HTTP boundary:
//! upstream unavailability (500), a missing relay fingerprint (404), and
//! payload validation failures (400, handled in the hardware handler).
//! Everything that goes wrong inside the aggregation pipeline collapses to
//! an upstream failure; per-relay geocode misses are not errors at all and
//! never reach this module.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_FACTOR, RETRY_INITIAL_DELAY_MS, RETRY_MAX_DELAY_SECS};

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

/// Error types for relay directory queries.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory could not be reached or timed out.
    #[error("Relay directory request error: {0}")]
    RequestError(#[from] ReqwestError),

    /// The directory answered with a non-success status.
    #[error("Relay directory returned status {0}")]
    StatusError(reqwest::StatusCode),
}

/// Error types for metrics store queries.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// The metrics store could not be reached or timed out.
    #[error("Metrics store request error: {0}")]
    RequestError(#[from] ReqwestError),

    /// The metrics store answered with a non-success status.
    #[error("Metrics store returned status {0}")]
    StatusError(reqwest::StatusCode),

    /// The metrics store answered 200 but the payload did not carry a
    /// successful result set.
    #[error("Metrics store reported query failure: {0}")]
    QueryFailed(String),
}

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
///
/// Callers bound the attempt count with `RETRY_MAX_ATTEMPTS`.
pub fn get_retry_strategy() -> ExponentialBackoff {
    ExponentialBackoff::from_millis(RETRY_INITIAL_DELAY_MS)
        .factor(RETRY_FACTOR)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
}
