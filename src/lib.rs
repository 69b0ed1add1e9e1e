//! relay_atlas library: relay directory and metrics facade
//!
//! This library provides the components behind a small HTTP facade over two
//! upstream data sources: a time-series metrics store and an
//! Onionoo-compatible relay directory. On top of the pass-through endpoints
//! it derives a geospatial density map of relays by resolving each relay's
//! IP address to a coordinate (GeoLite2) and bucketing coordinates into H3
//! hexagon cells.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use relay_atlas::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from([
//!     "relay_atlas",
//!     "--victoria-metrics-address",
//!     "http://127.0.0.1:8428",
//! ]);
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod hexgrid;
pub mod initialization;
pub mod metrics;
pub mod onionoo;
pub mod relay_map;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use relay_map::{aggregate, extract_address, HexInfo};
pub use server::{build_router, run_server, AppState};
