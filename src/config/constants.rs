//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including metric names, timeouts, and retry parameters.

// Metric names exposed by the consul agent exporter and queried verbatim
// from the metrics store.
/// Gauge counting relays, labelled by running status
pub const TOTAL_RELAYS_METRIC: &str = "total_relays";
/// Gauge summing observed bandwidth across relays, labelled by running status
pub const TOTAL_OBSERVED_BANDWIDTH_METRIC: &str = "total_observed_bandwidth";
/// Gauge averaging advertised bandwidth rate, labelled by running status
pub const AVERAGE_BANDWIDTH_RATE_METRIC: &str = "average_bandwidth_rate";

// Network operation timeouts
/// Per-request timeout for upstream HTTP calls in seconds.
/// Both the relay directory and the metrics store are expected to answer
/// well within this; a hung upstream must not hang the request forever.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

// Retry policy for upstream calls
/// Initial retry delay in milliseconds
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Backoff multiplication factor (doubles the delay with each retry)
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum retry attempts for upstream calls
pub const RETRY_MAX_ATTEMPTS: usize = 3;
