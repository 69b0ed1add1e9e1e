//! Request handlers.
//!
//! Each handler converts pipeline failures into the blanket responses the
//! frontend expects: 500 with a short message on upstream failure, 404 for
//! unknown fingerprints, 400 with field-level errors for invalid hardware
//! payloads. Nothing below this layer speaks HTTP.

mod hardware;
mod metrics;
mod relay_map;
mod relays;

pub use hardware::hardware_relays_handler;
pub use metrics::{
    average_bandwidth_rate_handler, average_bandwidth_rate_latest_handler,
    total_observed_bandwidth_handler, total_observed_bandwidth_latest_handler,
    total_relays_handler, total_relays_latest_handler,
};
pub use relay_map::relay_map_handler;
pub use relays::relay_handler;
