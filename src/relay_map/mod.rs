//! Relay density aggregation over the hexagon grid.
//!
//! The pipeline turns the directory's relay list into per-cell occupancy
//! counts: extract each relay's primary IP, geolocate it, bucket the
//! coordinate into an H3 cell, then enrich every occupied cell with its
//! center and boundary polygon.
//!
//! A relay drops out of the computation when it has no usable address or
//! its IP cannot be geolocated; the rest of the aggregation continues
//! (skip-and-continue). Relays sharing an IP each count: the map shows
//! relay density, not address density.

use std::collections::HashMap;

use h3o::CellIndex;
use serde::Serialize;

use crate::geoip::{GeoCoordinate, GeoResolver};
use crate::hexgrid::HexGrid;
use crate::onionoo::Relay;

/// Occupancy record for one hexagon cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexInfo {
    /// Opaque H3 cell identifier
    pub index: String,
    /// Number of relays whose coordinate fell into this cell, always >= 1
    pub relay_count: usize,
    /// Canonical center of the cell
    pub geo: GeoCoordinate,
    /// Polygon vertices of the cell
    pub boundary: Vec<GeoCoordinate>,
}

/// Extracts the IP portion of a relay's first listed address.
///
/// Returns `None` when the list is empty or the first entry is not in
/// `host:port` form. IPv6 entries (`[addr]:port`) yield the bare address
/// without brackets. Never panics on malformed input.
pub fn extract_address(or_addresses: &[String]) -> Option<&str> {
    let first = or_addresses.first()?;
    let (host, port) = first.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Aggregates the relay list into per-cell occupancy counts.
///
/// One full pass over the relays builds the cell counts; geometry is then
/// looked up once per distinct cell, not once per relay. The result is
/// sorted by cell identifier so output is deterministic.
pub fn aggregate(relays: &[Relay], resolver: &dyn GeoResolver, grid: &HexGrid) -> Vec<HexInfo> {
    let mut counts: HashMap<CellIndex, usize> = HashMap::new();
    let mut skipped = 0usize;

    for relay in relays {
        let Some(ip) = extract_address(&relay.or_addresses) else {
            skipped += 1;
            continue;
        };
        let coord = match resolver.locate(ip) {
            Ok(Some(coord)) => coord,
            Ok(None) => {
                skipped += 1;
                continue;
            }
            Err(e) => {
                log::debug!(
                    "Skipping relay {}: geolocation of {} failed: {}",
                    relay.fingerprint,
                    ip,
                    e
                );
                skipped += 1;
                continue;
            }
        };
        let cell = match grid.cell_for(coord) {
            Ok(cell) => cell,
            Err(e) => {
                log::debug!("Skipping relay {}: {}", relay.fingerprint, e);
                skipped += 1;
                continue;
            }
        };
        *counts.entry(cell).or_insert(0) += 1;
    }

    if skipped > 0 {
        log::debug!("{} of {} relays had no mappable location", skipped, relays.len());
    }

    let mut hexes: Vec<HexInfo> = counts
        .into_iter()
        .map(|(cell, relay_count)| HexInfo {
            index: cell.to_string(),
            relay_count,
            geo: grid.center_of(cell),
            boundary: grid.boundary_of(cell),
        })
        .collect();
    hexes.sort_by(|a, b| a.index.cmp(&b.index));
    hexes
}
