//! Relay directory data structures.

use serde::{Deserialize, Serialize};

/// One relay as reported by the directory.
///
/// Unknown fields in the upstream document are ignored; only the fields the
/// facade exposes are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct Relay {
    /// Uppercase SHA-1 identity fingerprint
    pub fingerprint: String,
    /// Whether the relay was running in the last consensus
    #[serde(default)]
    pub running: bool,
    /// Weight assigned by the directory authorities
    #[serde(default)]
    pub consensus_weight: u64,
    /// Network addresses in `host:port` form; the first entry is the
    /// primary onion-routing address
    #[serde(default)]
    pub or_addresses: Vec<String>,
}

/// The directory's `details` document.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayDetails {
    /// All relays known to the directory
    #[serde(default)]
    pub relays: Vec<Relay>,
}

impl RelayDetails {
    /// Finds a relay by its identity fingerprint.
    pub fn find_by_fingerprint(&self, fingerprint: &str) -> Option<&Relay> {
        self.relays
            .iter()
            .find(|relay| relay.fingerprint == fingerprint)
    }
}

/// The subset of relay fields exposed by `GET /relays/:fingerprint`.
#[derive(Debug, Clone, Serialize)]
pub struct RelaySummary {
    /// Uppercase SHA-1 identity fingerprint
    pub fingerprint: String,
    /// Whether the relay was running in the last consensus
    pub running: bool,
    /// Weight assigned by the directory authorities
    pub consensus_weight: u64,
}

impl From<&Relay> for RelaySummary {
    fn from(relay: &Relay) -> Self {
        Self {
            fingerprint: relay.fingerprint.clone(),
            running: relay.running,
            consensus_weight: relay.consensus_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_details_ignores_unknown_fields() {
        let json = r#"{
            "version": "8.0",
            "relays": [{
                "fingerprint": "ABCDEF0123456789",
                "running": true,
                "consensus_weight": 120,
                "or_addresses": ["1.2.3.4:9001"],
                "nickname": "unused"
            }]
        }"#;
        let details: RelayDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.relays.len(), 1);
        assert_eq!(details.relays[0].fingerprint, "ABCDEF0123456789");
        assert!(details.relays[0].running);
        assert_eq!(details.relays[0].consensus_weight, 120);
    }

    #[test]
    fn test_deserialize_relay_with_missing_optionals() {
        // A bridge-style entry without addresses or weight must not fail
        // deserialization of the whole document.
        let json = r#"{"relays": [{"fingerprint": "AA"}]}"#;
        let details: RelayDetails = serde_json::from_str(json).unwrap();
        assert!(!details.relays[0].running);
        assert_eq!(details.relays[0].consensus_weight, 0);
        assert!(details.relays[0].or_addresses.is_empty());
    }

    #[test]
    fn test_find_by_fingerprint() {
        let details = RelayDetails {
            relays: vec![
                Relay {
                    fingerprint: "AAAA".into(),
                    running: true,
                    consensus_weight: 10,
                    or_addresses: vec![],
                },
                Relay {
                    fingerprint: "BBBB".into(),
                    running: false,
                    consensus_weight: 0,
                    or_addresses: vec![],
                },
            ],
        };
        assert!(details.find_by_fingerprint("BBBB").is_some());
        assert!(details.find_by_fingerprint("CCCC").is_none());
    }

    #[test]
    fn test_summary_serialization() {
        let summary = RelaySummary {
            fingerprint: "AAAA".into(),
            running: true,
            consensus_weight: 42,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fingerprint": "AAAA",
                "running": true,
                "consensus_weight": 42
            })
        );
    }
}
