//! Client and response reshaping for the time-series metrics store.
//!
//! The store speaks the Prometheus HTTP API (VictoriaMetrics in
//! deployment). Each exported metric is labelled with a relay `status`
//! (`running` / `not-running`); the facade reshapes result sets into a map
//! keyed by that label so the frontend never sees the Prometheus envelope.

mod client;
mod reshape;
mod types;

// Re-export public API
pub use client::MetricsClient;
pub use reshape::{reshape_instant, reshape_range};
pub use types::{build_selector, QueryData, QueryLabels, QueryResponse, RangeDefaults, Series};
