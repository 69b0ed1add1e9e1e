//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::UPSTREAM_TIMEOUT_SECS;

/// Initializes the shared HTTP client for upstream calls.
///
/// Creates a `reqwest::Client` with an explicit per-request timeout so a
/// hung relay directory or metrics store fails the request instead of
/// hanging it indefinitely. The same client is shared by both upstream
/// collaborators; connection pooling is per-host inside reqwest.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
        .build()?;
    Ok(Arc::new(client))
}
