//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources built
//! once at startup: the logger and the HTTP client used for all upstream
//! calls. All initialization functions return proper error types.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
