//! Reshaping of Prometheus result sets into status-keyed maps.

use std::collections::BTreeMap;

use serde_json::Value;

use super::types::QueryData;

/// Maps each series' `status` label to its latest scalar value.
///
/// The scalar is the second element of the instant sample (the store
/// serializes it as a string). Series without a `status` label or without a
/// sample are skipped.
pub fn reshape_instant(data: &QueryData) -> BTreeMap<String, Value> {
    data.result
        .iter()
        .filter_map(|series| {
            let status = series.metric.get("status")?;
            let scalar = series.value.as_ref()?.get(1)?.clone();
            Some((status.clone(), scalar))
        })
        .collect()
}

/// Maps each series' `status` label to its sample list, verbatim.
///
/// Values are passed through untouched so timestamps and string-encoded
/// scalars reach the caller exactly as the store produced them.
pub fn reshape_range(data: &QueryData) -> BTreeMap<String, Value> {
    data.result
        .iter()
        .filter_map(|series| {
            let status = series.metric.get("status")?;
            let values = series.values.clone()?;
            Some((status.clone(), values))
        })
        .collect()
}
