//! Hardware relay registration handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A serial number entry on a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialNumber {
    /// Kind of serial number (board, case, ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The serial number itself
    #[serde(default)]
    pub number: String,
}

/// A public key entry on a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKey {
    /// Key type
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Key material identifier
    #[serde(default)]
    pub number: String,
}

/// A certificate entry on a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate type
    #[serde(rename = "type", default)]
    pub kind: String,
    /// PEM or fingerprint of the certificate
    #[serde(default)]
    pub certificate: String,
}

/// Hardware relay registration payload.
///
/// Every field defaults to empty on deserialization so validation can
/// report all missing fields together instead of failing on the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareRelay {
    /// Device identifier
    #[serde(default)]
    pub id: String,
    /// Manufacturer
    #[serde(default)]
    pub company: String,
    /// Hardware format/revision
    #[serde(default)]
    pub format: String,
    /// Operator wallet address
    #[serde(default)]
    pub wallet: String,
    /// Relay identity fingerprint
    #[serde(default)]
    pub fingerprint: String,
    /// Serial numbers, at least one required
    #[serde(rename = "serNums", default)]
    pub ser_nums: Vec<SerialNumber>,
    /// Public keys, at least one required
    #[serde(rename = "pubKeys", default)]
    pub pub_keys: Vec<PublicKey>,
    /// Certificates, at least one required
    #[serde(default)]
    pub certs: Vec<Certificate>,
}

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Path of the offending field
    pub field: String,
    /// Human-readable requirement
    pub message: String,
}

fn require(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError {
            field: field.to_string(),
            message: format!("{} should not be empty", field),
        });
    }
}

impl HardwareRelay {
    /// Checks every required field, collecting all failures.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        require(&mut errors, "id", &self.id);
        require(&mut errors, "company", &self.company);
        require(&mut errors, "format", &self.format);
        require(&mut errors, "wallet", &self.wallet);
        require(&mut errors, "fingerprint", &self.fingerprint);

        if self.ser_nums.is_empty() {
            errors.push(ValidationError {
                field: "serNums".into(),
                message: "serNums should not be empty".into(),
            });
        }
        for (i, entry) in self.ser_nums.iter().enumerate() {
            require(&mut errors, &format!("serNums[{}].type", i), &entry.kind);
            require(&mut errors, &format!("serNums[{}].number", i), &entry.number);
        }

        if self.pub_keys.is_empty() {
            errors.push(ValidationError {
                field: "pubKeys".into(),
                message: "pubKeys should not be empty".into(),
            });
        }
        for (i, entry) in self.pub_keys.iter().enumerate() {
            require(&mut errors, &format!("pubKeys[{}].type", i), &entry.kind);
            require(&mut errors, &format!("pubKeys[{}].number", i), &entry.number);
        }

        if self.certs.is_empty() {
            errors.push(ValidationError {
                field: "certs".into(),
                message: "certs should not be empty".into(),
            });
        }
        for (i, entry) in self.certs.iter().enumerate() {
            require(&mut errors, &format!("certs[{}].type", i), &entry.kind);
            require(
                &mut errors,
                &format!("certs[{}].certificate", i),
                &entry.certificate,
            );
        }

        errors
    }
}

/// `POST /hardware/relays` validates a registration payload.
///
/// Echoes the payload back on success; answers 400 with the full list of
/// field-level failures otherwise. The payload is not processed further.
pub async fn hardware_relays_handler(Json(payload): Json<HardwareRelay>) -> Response {
    let errors = payload.validate();
    if !errors.is_empty() {
        log::debug!(
            "Rejected hardware registration for id {:?}: {} validation errors",
            payload.id,
            errors.len()
        );
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response();
    }

    Json(payload).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> HardwareRelay {
        serde_json::from_value(serde_json::json!({
            "id": "atornode-01",
            "company": "ExampleCorp",
            "format": "rack-1u",
            "wallet": "0xabc123",
            "fingerprint": "AA00BB11CC22",
            "serNums": [{"type": "board", "number": "SN-1"}],
            "pubKeys": [{"type": "ed25519", "number": "PK-1"}],
            "certs": [{"type": "device", "certificate": "-----BEGIN..."}]
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_empty());
    }

    #[test]
    fn test_missing_scalar_fields_all_reported() {
        let payload: HardwareRelay = serde_json::from_value(serde_json::json!({
            "serNums": [{"type": "board", "number": "SN-1"}],
            "pubKeys": [{"type": "ed25519", "number": "PK-1"}],
            "certs": [{"type": "device", "certificate": "cert"}]
        }))
        .unwrap();

        let errors = payload.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["id", "company", "format", "wallet", "fingerprint"]
        );
        assert!(errors[0].message.contains("should not be empty"));
    }

    #[test]
    fn test_empty_nested_arrays_reported() {
        let mut payload = valid_payload();
        payload.ser_nums.clear();
        payload.certs.clear();

        let errors = payload.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"serNums"));
        assert!(fields.contains(&"certs"));
        assert!(!fields.contains(&"pubKeys"));
    }

    #[test]
    fn test_nested_subfields_reported_with_index() {
        let mut payload = valid_payload();
        payload.ser_nums.push(SerialNumber {
            kind: String::new(),
            number: "SN-2".into(),
        });

        let errors = payload.validate();
        assert!(errors.iter().any(|e| e.field == "serNums[1].type"));
    }

    #[test]
    fn test_payload_roundtrips_with_wire_field_names() {
        let payload = valid_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("serNums").is_some());
        assert!(json.get("pubKeys").is_some());
        assert_eq!(json["serNums"][0]["type"], "board");
        assert_eq!(json["certs"][0]["certificate"], "-----BEGIN...");
    }
}
