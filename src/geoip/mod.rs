//! GeoIP lookup using MaxMind GeoLite2 database.
//!
//! This module resolves relay IP addresses to geographic coordinates using a
//! local GeoLite2 City database. Lookups are synchronous and never suspend.
//!
//! A miss (the database has no location for an IP) is a valid outcome and is
//! reported as `Ok(None)`, never as a placeholder coordinate: callers must be
//! able to tell "resolved to the equator" apart from "no geolocation data".
//! Actual failures (malformed IP string, database errors) are reported as
//! `Err` so callers can choose their own policy.

mod lookup;
mod types;

// Re-export public API
pub use lookup::GeoDatabase;
pub use types::GeoCoordinate;

use thiserror::Error;

/// Error types for GeoIP lookups.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The input string is not a valid IP address.
    #[error("Invalid IP address {0:?}: {1}")]
    InvalidIp(String, std::net::AddrParseError),

    /// Failed to open the database file at startup.
    #[error("Failed to open GeoIP database at {path}: {source}")]
    OpenError {
        /// Configured database path
        path: String,
        /// Underlying reader error
        source: maxminddb::MaxMindDbError,
    },

    /// The database reader failed during a lookup.
    #[error("GeoIP database error: {0}")]
    DatabaseError(#[from] maxminddb::MaxMindDbError),
}

/// Maps an IP address string to a geographic coordinate.
///
/// This is the capability boundary between the aggregation pipeline and the
/// external geolocation database; tests substitute an in-memory
/// implementation.
pub trait GeoResolver: Send + Sync {
    /// Resolves `ip` to a coordinate.
    ///
    /// Returns `Ok(None)` when the database holds no location for the
    /// address, and `Err` when the lookup itself fails.
    fn locate(&self, ip: &str) -> Result<Option<GeoCoordinate>, GeoIpError>;
}
