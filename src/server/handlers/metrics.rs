//! Metrics proxy handlers.
//!
//! Six thin routes over two shared helpers: three range queries
//! parameterized by `from`/`to`/`interval`, and three instant (`-latest`)
//! variants. Each reshapes the store's result set into a status-keyed map.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::config::{
    AVERAGE_BANDWIDTH_RATE_METRIC, TOTAL_OBSERVED_BANDWIDTH_METRIC, TOTAL_RELAYS_METRIC,
};
use crate::metrics::{build_selector, reshape_instant, reshape_range};
use crate::server::types::AppState;

/// Optional window overrides accepted by the range endpoints.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    from: Option<String>,
    to: Option<String>,
    interval: Option<String>,
}

async fn range_metric(state: &AppState, metric: &str, params: RangeParams) -> Response {
    let selector = build_selector(metric, &state.labels);
    let defaults = &state.range_defaults;
    let from = params.from.unwrap_or_else(|| defaults.from.clone());
    let to = params.to.unwrap_or_else(|| defaults.to.clone());
    let interval = params.interval.unwrap_or_else(|| defaults.interval.clone());

    match state.metrics.query_range(&selector, &from, &to, &interval).await {
        Ok(data) => Json(reshape_range(&data)).into_response(),
        Err(e) => {
            log::error!("Range query for {} failed: {}", metric, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error querying VictoriaMetrics",
            )
                .into_response()
        }
    }
}

async fn instant_metric(state: &AppState, metric: &str) -> Response {
    let selector = build_selector(metric, &state.labels);

    match state.metrics.query(&selector).await {
        Ok(data) => Json(reshape_instant(&data)).into_response(),
        Err(e) => {
            log::error!("Instant query for {} failed: {}", metric, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error querying VictoriaMetrics",
            )
                .into_response()
        }
    }
}

/// `GET /total-relays`
pub async fn total_relays_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Response {
    range_metric(&state, TOTAL_RELAYS_METRIC, params).await
}

/// `GET /total-observed-bandwidth`
pub async fn total_observed_bandwidth_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Response {
    range_metric(&state, TOTAL_OBSERVED_BANDWIDTH_METRIC, params).await
}

/// `GET /average-bandwidth-rate`
pub async fn average_bandwidth_rate_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Response {
    range_metric(&state, AVERAGE_BANDWIDTH_RATE_METRIC, params).await
}

/// `GET /total-relays-latest`
pub async fn total_relays_latest_handler(State(state): State<AppState>) -> Response {
    instant_metric(&state, TOTAL_RELAYS_METRIC).await
}

/// `GET /total-observed-bandwidth-latest`
pub async fn total_observed_bandwidth_latest_handler(State(state): State<AppState>) -> Response {
    instant_metric(&state, TOTAL_OBSERVED_BANDWIDTH_METRIC).await
}

/// `GET /average-bandwidth-rate-latest`
pub async fn average_bandwidth_rate_latest_handler(State(state): State<AppState>) -> Response {
    instant_metric(&state, AVERAGE_BANDWIDTH_RATE_METRIC).await
}
