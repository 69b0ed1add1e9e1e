//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration. Every option can also be supplied through an
//! environment variable (loaded from `.env` by the binary), matching the
//! deployment convention of the exporter stack this service fronts.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, read once at startup.
///
/// Constructed from CLI flags with environment-variable fallback and passed
/// by reference into each component constructor; nothing reads the
/// environment after startup.
#[derive(Clone, Debug, Parser)]
#[command(name = "relay_atlas", about = "Relay directory and metrics facade")]
pub struct Config {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base address of the VictoriaMetrics-compatible metrics store,
    /// e.g. `http://10.1.244.2:8428`
    #[arg(long, env = "VICTORIA_METRICS_ADDRESS")]
    pub victoria_metrics_address: String,

    /// Host:port of the Onionoo-compatible relay directory
    #[arg(long, env = "ONIONOO_INSTANCE", default_value = "10.1.244.1:9090")]
    pub onionoo_instance: String,

    /// Protocol prefix for the relay directory address
    #[arg(long, env = "ONIONOO_PROTOCOL", default_value = "http://")]
    pub onionoo_protocol: String,

    /// Cluster label scoping metric queries
    #[arg(long, env = "CLUSTER", default_value = "local")]
    pub cluster: String,

    /// Environment label scoping metric queries
    #[arg(long = "environment", env = "ENV", default_value = "main")]
    pub env: String,

    /// Job label scoping metric queries
    #[arg(long, env = "JOB", default_value = "consulagentonionoo")]
    pub job: String,

    /// Default start of the range-query window (relative or RFC3339)
    #[arg(long, env = "FROM", default_value = "-7d")]
    pub from: String,

    /// Default end of the range-query window
    #[arg(long, env = "TO", default_value = "now")]
    pub to: String,

    /// Default step between range-query samples
    #[arg(long, env = "INTERVAL", default_value = "6h")]
    pub interval: String,

    /// H3 resolution level (0-15) used to bucket relay coordinates.
    /// Fixed for the process lifetime.
    #[arg(long, env = "HEXAGON_RESOLUTION", default_value_t = 4)]
    pub hexagon_resolution: u8,

    /// Path to the GeoLite2 City database file
    #[arg(long, env = "GEOIP_DB_PATH", default_value = "./GeoLite2-City.mmdb")]
    pub geoip_db_path: std::path::PathBuf,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Full base URL of the relay directory, protocol prefix included.
    pub fn onionoo_base_url(&self) -> String {
        format!("{}{}", self.onionoo_protocol, self.onionoo_instance)
    }
}
