//! Hexagonal spatial indexing on the H3 grid.
//!
//! Wraps the `h3o` library behind a grid fixed at one resolution, configured
//! once at startup. All operations are pure functions of their inputs and
//! that resolution.
//!
//! Cell identifiers cross the HTTP boundary as opaque strings; `parse_cell`
//! is the only way back from a string to a typed [`CellIndex`] and rejects
//! malformed identifiers as well as identifiers minted at a different
//! resolution. The geometry accessors take the typed index, so invalid input
//! cannot reach them.

use std::str::FromStr;

use h3o::{CellIndex, LatLng, Resolution};
use thiserror::Error;

use crate::geoip::GeoCoordinate;

/// Error types for hexagon grid operations.
#[derive(Error, Debug)]
pub enum HexGridError {
    /// The configured resolution is outside the H3 range.
    #[error("Hexagon resolution {0} is out of range (expected 0-15)")]
    InvalidResolution(u8),

    /// The coordinate cannot be placed on the grid (non-finite degrees).
    #[error("Coordinate ({latitude}, {longitude}) is not a valid location")]
    InvalidCoordinate {
        /// Offending latitude
        latitude: f64,
        /// Offending longitude
        longitude: f64,
    },

    /// The string is not an H3 cell identifier at all.
    #[error("Malformed hexagon cell identifier {0:?}: {1}")]
    MalformedCell(String, h3o::error::InvalidCellIndex),

    /// The identifier is a valid cell at some other resolution.
    #[error("Cell {cell} has resolution {actual}, this grid indexes at resolution {expected}")]
    ResolutionMismatch {
        /// The offending identifier
        cell: String,
        /// Resolution the identifier was minted at
        actual: u8,
        /// Resolution this grid is fixed to
        expected: u8,
    },
}

/// A global hexagonal grid at a fixed resolution.
///
/// Cheap to copy; holds only the resolution.
#[derive(Debug, Clone, Copy)]
pub struct HexGrid {
    resolution: Resolution,
}

impl HexGrid {
    /// Creates a grid at the given H3 resolution level (0-15).
    pub fn new(resolution: u8) -> Result<Self, HexGridError> {
        let resolution = Resolution::try_from(resolution)
            .map_err(|_| HexGridError::InvalidResolution(resolution))?;
        Ok(Self { resolution })
    }

    /// Maps a coordinate to the cell containing it.
    ///
    /// Deterministic and total for finite coordinates: any valid lat/lon
    /// pair maps to exactly one cell at this grid's resolution.
    pub fn cell_for(&self, coord: GeoCoordinate) -> Result<CellIndex, HexGridError> {
        let latlng =
            LatLng::new(coord.latitude, coord.longitude).map_err(|_| {
                HexGridError::InvalidCoordinate {
                    latitude: coord.latitude,
                    longitude: coord.longitude,
                }
            })?;
        Ok(latlng.to_cell(self.resolution))
    }

    /// Parses an opaque cell identifier string minted by this grid.
    ///
    /// Malformed strings and identifiers at a different resolution are
    /// distinct, descriptive errors; they are never silently tolerated.
    pub fn parse_cell(&self, index: &str) -> Result<CellIndex, HexGridError> {
        let cell = CellIndex::from_str(index)
            .map_err(|e| HexGridError::MalformedCell(index.to_string(), e))?;
        if cell.resolution() != self.resolution {
            return Err(HexGridError::ResolutionMismatch {
                cell: index.to_string(),
                actual: u8::from(cell.resolution()),
                expected: u8::from(self.resolution),
            });
        }
        Ok(cell)
    }

    /// Returns the canonical center of a cell.
    ///
    /// Lossy by design: every coordinate inside the cell maps back to this
    /// same center, not to the original input.
    pub fn center_of(&self, cell: CellIndex) -> GeoCoordinate {
        let center = LatLng::from(cell);
        GeoCoordinate::new(center.lat(), center.lng())
    }

    /// Returns the polygon vertices of a cell in h3o's winding order.
    ///
    /// The first vertex is not repeated at the end; the polygon is
    /// implicitly closed.
    pub fn boundary_of(&self, cell: CellIndex) -> Vec<GeoCoordinate> {
        cell.boundary()
            .iter()
            .map(|vertex| GeoCoordinate::new(vertex.lat(), vertex.lng()))
            .collect()
    }
}
