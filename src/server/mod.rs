//! HTTP layer exposing the facade endpoints.
//!
//! Routing and startup only; the handlers own the error-to-status mapping
//! and live one module down. All state shared across requests is read-only,
//! so concurrent requests run the aggregation pipeline independently.

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;

use handlers::{
    average_bandwidth_rate_handler, average_bandwidth_rate_latest_handler, hardware_relays_handler,
    relay_handler, relay_map_handler, total_observed_bandwidth_handler,
    total_observed_bandwidth_latest_handler, total_relays_handler, total_relays_latest_handler,
};
pub use types::AppState;

use crate::config::Config;
use crate::geoip::GeoDatabase;
use crate::hexgrid::HexGrid;
use crate::initialization::init_client;
use crate::metrics::{MetricsClient, QueryLabels, RangeDefaults};
use crate::onionoo::OnionooClient;

/// Builds the application router over the given state.
///
/// Separate from [`run_server`] so tests can drive the routes with fake
/// collaborators behind an ephemeral listener.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/relay-map/", get(relay_map_handler))
        .route("/relays/:fingerprint", get(relay_handler))
        .route("/total-relays", get(total_relays_handler))
        .route(
            "/total-observed-bandwidth",
            get(total_observed_bandwidth_handler),
        )
        .route(
            "/average-bandwidth-rate",
            get(average_bandwidth_rate_handler),
        )
        .route("/total-relays-latest", get(total_relays_latest_handler))
        .route(
            "/total-observed-bandwidth-latest",
            get(total_observed_bandwidth_latest_handler),
        )
        .route(
            "/average-bandwidth-rate-latest",
            get(average_bandwidth_rate_latest_handler),
        )
        .route("/hardware/relays", post(hardware_relays_handler))
        .with_state(state)
}

/// Wires up all collaborators from the configuration and serves forever.
///
/// # Errors
///
/// Returns an error if a startup step fails: opening the GeoIP database,
/// validating the hexagon resolution, or binding the listener.
pub async fn run_server(config: Config) -> Result<()> {
    let client = init_client().context("Failed to initialize HTTP client")?;

    let geo = GeoDatabase::open(&config.geoip_db_path)
        .context("Failed to open GeoIP database")?;
    let grid = HexGrid::new(config.hexagon_resolution)
        .context("Invalid hexagon resolution")?;

    let onionoo = OnionooClient::new(client.clone(), config.onionoo_base_url());
    let metrics = MetricsClient::new(client, config.victoria_metrics_address.clone());

    let state = AppState {
        onionoo: Arc::new(onionoo),
        metrics: Arc::new(metrics),
        geo: Arc::new(geo),
        grid,
        labels: QueryLabels {
            cluster: config.cluster.clone(),
            env: config.env.clone(),
            instance: config.onionoo_instance.clone(),
            job: config.job.clone(),
        },
        range_defaults: RangeDefaults {
            from: config.from.clone(),
            to: config.to.clone(),
            interval: config.interval.clone(),
        },
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind to port {}", config.port))?;

    log::info!("Server running at http://localhost:{}", config.port);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
