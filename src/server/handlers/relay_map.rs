//! Relay density map handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::relay_map::aggregate;
use crate::server::types::AppState;

/// `GET /relay-map/` runs the full aggregation pipeline.
///
/// The only fallible step from the caller's perspective is the directory
/// fetch; per-relay geocode misses are skipped inside the aggregation and
/// never surface as a partial failure.
pub async fn relay_map_handler(State(state): State<AppState>) -> Response {
    let details = match state.onionoo.details().await {
        Ok(details) => details,
        Err(e) => {
            log::error!("Relay map: directory fetch failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error querying relay map")
                .into_response();
        }
    };

    let hexes = aggregate(&details.relays, state.geo.as_ref(), &state.grid);
    log::debug!(
        "Relay map: {} relays aggregated into {} cells",
        details.relays.len(),
        hexes.len()
    );

    Json(hexes).into_response()
}
