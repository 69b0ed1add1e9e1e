//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (metric names, timeouts, retry policy)
//! - CLI/environment option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
