//! GeoIP data structures.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A geographic coordinate in finite floating-point degrees.
///
/// Serialized as the two-element array `[latitude, longitude]`, the wire
/// format the map frontend consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Serialize for GeoCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.latitude)?;
        seq.serialize_element(&self.longitude)?;
        seq.end()
    }
}
