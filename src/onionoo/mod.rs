//! Client for an Onionoo-compatible relay directory.
//!
//! The directory publishes structured metadata about every known relay;
//! this module fetches the `details` document and deserializes the fields
//! the service consumes. The full dataset is re-fetched on every request,
//! nothing is cached across requests.

mod client;
mod types;

// Re-export public API
pub use client::OnionooClient;
pub use types::{Relay, RelayDetails, RelaySummary};
