//! Metrics store HTTP client.

use std::sync::Arc;

use tokio_retry::Retry;

use super::types::{QueryData, QueryResponse};
use crate::config::RETRY_MAX_ATTEMPTS;
use crate::error_handling::{get_retry_strategy, MetricsError};

/// Client for a VictoriaMetrics-compatible metrics store.
pub struct MetricsClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl MetricsClient {
    /// Creates a client against `base_url`, e.g. `http://10.1.244.2:8428`.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Runs an instant query, returning the latest sample per series.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError` if the store is unreachable, answers a
    /// non-success status, or reports a query failure in the envelope.
    pub async fn query(&self, expr: &str) -> Result<QueryData, MetricsError> {
        let url = format!("{}/api/v1/query", self.base_url);
        self.run(&url, &[("query", expr)]).await
    }

    /// Runs a range query over `[start, end]` at the given step.
    ///
    /// `start`/`end` accept the store's relative notation (`-7d`, `now`)
    /// as well as absolute timestamps.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::query`].
    pub async fn query_range(
        &self,
        expr: &str,
        start: &str,
        end: &str,
        step: &str,
    ) -> Result<QueryData, MetricsError> {
        let url = format!("{}/api/v1/query_range", self.base_url);
        self.run(
            &url,
            &[("query", expr), ("start", start), ("end", end), ("step", step)],
        )
        .await
    }

    async fn run(&self, url: &str, params: &[(&str, &str)]) -> Result<QueryData, MetricsError> {
        let retry_strategy = get_retry_strategy().take(RETRY_MAX_ATTEMPTS);

        let response: QueryResponse = Retry::spawn(retry_strategy, || async {
            let response = self.client.get(url).query(params).send().await?;
            if !response.status().is_success() {
                return Err(MetricsError::StatusError(response.status()));
            }
            Ok(response.json().await?)
        })
        .await?;

        if response.status != "success" {
            return Err(MetricsError::QueryFailed(
                response.error.unwrap_or_else(|| response.status.clone()),
            ));
        }
        response
            .data
            .ok_or_else(|| MetricsError::QueryFailed("missing data in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_client(server: &Server) -> MetricsClient {
        MetricsClient::new(
            Arc::new(reqwest::Client::new()),
            format!("http://{}", server.addr()),
        )
    }

    #[tokio::test]
    async fn test_query_sends_expression() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/query"),
                request::query(url_decoded(contains(("query", "up")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "status": "success",
                "data": {"resultType": "vector", "result": []}
            }))),
        );

        let data = test_client(&server).query("up").await.unwrap();
        assert_eq!(data.result_type, "vector");
        assert!(data.result.is_empty());
    }

    #[tokio::test]
    async fn test_query_range_sends_window_params() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/query_range"),
                request::query(url_decoded(contains(("start", "-7d")))),
                request::query(url_decoded(contains(("end", "now")))),
                request::query(url_decoded(contains(("step", "6h")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "status": "success",
                "data": {"resultType": "matrix", "result": []}
            }))),
        );

        let data = test_client(&server)
            .query_range("up", "-7d", "now", "6h")
            .await
            .unwrap();
        assert_eq!(data.result_type, "matrix");
    }

    #[tokio::test]
    async fn test_query_surfaces_envelope_failure() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/query")).respond_with(
                json_encoded(serde_json::json!({
                    "status": "error",
                    "error": "cannot parse query"
                })),
            ),
        );

        let result = test_client(&server).query("up{").await;
        assert!(
            matches!(result, Err(MetricsError::QueryFailed(msg)) if msg.contains("cannot parse"))
        );
    }

    #[tokio::test]
    async fn test_query_surfaces_status_error_after_retries() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/query"))
                .times(1 + RETRY_MAX_ATTEMPTS)
                .respond_with(status_code(503)),
        );

        let result = test_client(&server).query("up").await;
        assert!(matches!(result, Err(MetricsError::StatusError(s)) if s.as_u16() == 503));
    }
}
