//! Single-relay lookup handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::onionoo::RelaySummary;
use crate::server::types::AppState;

/// `GET /relays/:fingerprint` looks up one relay in the directory.
pub async fn relay_handler(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
) -> Response {
    let details = match state.onionoo.details().await {
        Ok(details) => details,
        Err(e) => {
            log::error!("Relay lookup: directory fetch failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error querying Onionoo")
                .into_response();
        }
    };

    match details.find_by_fingerprint(&fingerprint) {
        Some(relay) => Json(RelaySummary::from(relay)).into_response(),
        None => (StatusCode::NOT_FOUND, "Relay not found").into_response(),
    }
}
