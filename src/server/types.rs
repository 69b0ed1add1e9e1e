//! Shared server state.

use std::sync::Arc;

use crate::geoip::GeoResolver;
use crate::hexgrid::HexGrid;
use crate::metrics::{MetricsClient, QueryLabels, RangeDefaults};
use crate::onionoo::OnionooClient;

/// Read-only state shared by all request handlers.
///
/// Constructed once at startup; every aggregation run builds its own local
/// state, so handlers never mutate anything in here. The geo resolver is a
/// trait object so tests can substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    /// Relay directory client
    pub onionoo: Arc<OnionooClient>,
    /// Metrics store client
    pub metrics: Arc<MetricsClient>,
    /// IP-to-coordinate resolver
    pub geo: Arc<dyn GeoResolver>,
    /// Hexagon grid at the configured resolution
    pub grid: HexGrid,
    /// Label values scoping metric queries
    pub labels: QueryLabels,
    /// Default range-query window and step
    pub range_defaults: RangeDefaults,
}
