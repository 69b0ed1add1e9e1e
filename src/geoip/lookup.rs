//! IP address lookup against a GeoLite2 City database file.

use std::path::Path;

use maxminddb::Reader;

use super::types::GeoCoordinate;
use super::{GeoIpError, GeoResolver};

/// GeoLite2 City database opened once at startup.
///
/// The reader owns the database bytes; lookups are lock-free reads and safe
/// to share across request handlers.
pub struct GeoDatabase {
    reader: Reader<Vec<u8>>,
}

impl GeoDatabase {
    /// Opens the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GeoIpError::OpenError` if the file is missing or not a valid
    /// MaxMind database.
    pub fn open(path: &Path) -> Result<Self, GeoIpError> {
        let reader = Reader::open_readfile(path).map_err(|source| GeoIpError::OpenError {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded GeoIP database from {}", path.display());
        Ok(Self { reader })
    }
}

/// Parses an IP string, wrapping failures in the module's error type.
fn parse_ip(ip: &str) -> Result<std::net::IpAddr, GeoIpError> {
    ip.parse()
        .map_err(|e| GeoIpError::InvalidIp(ip.to_string(), e))
}

impl GeoResolver for GeoDatabase {
    fn locate(&self, ip: &str) -> Result<Option<GeoCoordinate>, GeoIpError> {
        let ip_addr = parse_ip(ip)?;

        // maxminddb 0.27 API: lookup() returns a LookupResult; has_data()
        // distinguishes "address not in database" from decode failures.
        let lookup = self.reader.lookup(ip_addr)?;
        if !lookup.has_data() {
            return Ok(None);
        }

        let city: maxminddb::geoip2::City = match lookup.decode()? {
            Some(city) => city,
            None => return Ok(None),
        };

        // A record may carry a country but no usable location; treat that
        // as a miss rather than inventing a coordinate.
        match (city.location.latitude, city.location.longitude) {
            (Some(latitude), Some(longitude)) => {
                Ok(Some(GeoCoordinate::new(latitude, longitude)))
            }
            _ => Ok(None),
        }
    }
}
