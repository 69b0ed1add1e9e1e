// Shared test helpers for spinning up the facade with fake collaborators.
//
// This module provides common utilities used across multiple test files to
// reduce duplication. Upstreams are httptest mock servers; the GeoIP
// database is replaced by an in-memory resolver so no .mmdb file is needed.

use std::collections::HashMap;
use std::sync::Arc;

use relay_atlas::geoip::{GeoCoordinate, GeoIpError, GeoResolver};
use relay_atlas::hexgrid::HexGrid;
use relay_atlas::metrics::{MetricsClient, QueryLabels, RangeDefaults};
use relay_atlas::onionoo::OnionooClient;
use relay_atlas::{build_router, AppState};

/// In-memory resolver standing in for the GeoLite2 database.
pub struct MapResolver {
    known: HashMap<String, GeoCoordinate>,
}

impl MapResolver {
    #[allow(dead_code)] // Used by other test files
    pub fn new(entries: &[(&str, f64, f64)]) -> Self {
        Self {
            known: entries
                .iter()
                .map(|(ip, lat, lon)| (ip.to_string(), GeoCoordinate::new(*lat, *lon)))
                .collect(),
        }
    }
}

impl GeoResolver for MapResolver {
    fn locate(&self, ip: &str) -> Result<Option<GeoCoordinate>, GeoIpError> {
        Ok(self.known.get(ip).copied())
    }
}

/// Starts the app on an ephemeral port and returns its base URL.
///
/// `onionoo_url` and `metrics_url` point at mock servers (or at nothing,
/// for unreachable-upstream tests).
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(
    onionoo_url: String,
    metrics_url: String,
    resolver: Arc<dyn GeoResolver>,
) -> String {
    let client = Arc::new(reqwest::Client::new());
    let state = AppState {
        onionoo: Arc::new(OnionooClient::new(client.clone(), onionoo_url)),
        metrics: Arc::new(MetricsClient::new(client, metrics_url)),
        geo: resolver,
        grid: HexGrid::new(4).expect("resolution 4 is valid"),
        labels: QueryLabels {
            cluster: "local".into(),
            env: "main".into(),
            instance: "10.1.244.1:9090".into(),
            job: "consulagentonionoo".into(),
        },
        range_defaults: RangeDefaults {
            from: "-7d".into(),
            to: "now".into(),
            interval: "6h".into(),
        },
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server task failed");
    });

    format!("http://{}", addr)
}
