//! Integration tests for the metrics proxy endpoints.

mod helpers;

use std::sync::Arc;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::Value;

use helpers::{spawn_app, MapResolver};

async fn spawn_with_metrics(metrics: &Server) -> String {
    spawn_app(
        "http://127.0.0.1:1".into(),
        format!("http://{}", metrics.addr()),
        Arc::new(MapResolver::new(&[])),
    )
    .await
}

#[tokio::test]
async fn test_range_endpoint_reshapes_by_status() {
    let running = serde_json::json!([[1722000000, "100"], [1722021600, "104"]]);
    let stopped = serde_json::json!([[1722000000, "3"], [1722021600, "2"]]);

    let metrics = Server::run();
    metrics.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/v1/query_range"),
            // Defaults must be applied when the request has no params.
            request::query(url_decoded(contains(("start", "-7d")))),
            request::query(url_decoded(contains(("end", "now")))),
            request::query(url_decoded(contains(("step", "6h")))),
            request::query(url_decoded(contains((
                "query",
                "total_relays{cluster=\"local\", env=\"main\", \
                 instance=\"10.1.244.1:9090\", job=\"consulagentonionoo\"}"
            )))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "status": "success",
            "data": {
                "resultType": "matrix",
                "result": [
                    {"metric": {"status": "running"}, "values": running},
                    {"metric": {"status": "not-running"}, "values": stopped}
                ]
            }
        }))),
    );

    let base = spawn_with_metrics(&metrics).await;
    let response = reqwest::get(format!("{}/total-relays", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["running"], running);
    assert_eq!(body["not-running"], stopped);
}

#[tokio::test]
async fn test_range_endpoint_forwards_window_params() {
    let metrics = Server::run();
    metrics.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/v1/query_range"),
            request::query(url_decoded(contains(("start", "-1d")))),
            request::query(url_decoded(contains(("end", "now")))),
            request::query(url_decoded(contains(("step", "1h")))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "status": "success",
            "data": {"resultType": "matrix", "result": []}
        }))),
    );

    let base = spawn_with_metrics(&metrics).await;
    let response = reqwest::get(format!(
        "{}/average-bandwidth-rate?from=-1d&interval=1h",
        base
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn test_latest_endpoint_reshapes_to_scalars() {
    let metrics = Server::run();
    metrics.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/v1/query"),
            request::query(url_decoded(contains((
                "query",
                "total_observed_bandwidth{cluster=\"local\", env=\"main\", \
                 instance=\"10.1.244.1:9090\", job=\"consulagentonionoo\"}"
            )))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "status": "success",
            "data": {
                "resultType": "vector",
                "result": [
                    {"metric": {"status": "running"}, "value": [1722433200, "81920"]},
                    {"metric": {"status": "not-running"}, "value": [1722433200, "0"]}
                ]
            }
        }))),
    );

    let base = spawn_with_metrics(&metrics).await;
    let response = reqwest::get(format!("{}/total-observed-bandwidth-latest", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"running": "81920", "not-running": "0"})
    );
}

#[tokio::test]
async fn test_metrics_upstream_failure_is_500() {
    let base = spawn_app(
        "http://127.0.0.1:1".into(),
        "http://127.0.0.1:1".into(),
        Arc::new(MapResolver::new(&[])),
    )
    .await;

    let response = reqwest::get(format!("{}/total-relays-latest", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "Error querying VictoriaMetrics"
    );
}
