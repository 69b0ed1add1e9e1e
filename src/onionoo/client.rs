//! Relay directory HTTP client.

use std::sync::Arc;

use tokio_retry::Retry;

use super::types::RelayDetails;
use crate::config::RETRY_MAX_ATTEMPTS;
use crate::error_handling::{get_retry_strategy, DirectoryError};

/// Client for an Onionoo-compatible relay directory instance.
pub struct OnionooClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl OnionooClient {
    /// Creates a client against `base_url` (protocol prefix included).
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the directory's `details` document.
    ///
    /// Retries transient failures with bounded exponential backoff; the
    /// shared client's timeout bounds each attempt.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` if the directory stays unreachable, answers
    /// a non-success status, or sends a payload that does not deserialize.
    pub async fn details(&self) -> Result<RelayDetails, DirectoryError> {
        let url = format!("{}/details", self.base_url);
        let retry_strategy = get_retry_strategy().take(RETRY_MAX_ATTEMPTS);

        let details: RelayDetails = Retry::spawn(retry_strategy, || async {
            let response = self.client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(DirectoryError::StatusError(response.status()));
            }
            Ok(response.json().await?)
        })
        .await?;

        log::debug!("Fetched {} relays from {}", details.relays.len(), url);
        Ok(details)
    }
}
