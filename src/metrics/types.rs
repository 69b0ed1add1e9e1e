//! Metrics store data structures and query building.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level Prometheus API response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// `"success"` or `"error"`
    pub status: String,
    /// Error message when `status` is `"error"`
    #[serde(default)]
    pub error: Option<String>,
    /// Result payload, present on success
    #[serde(default)]
    pub data: Option<QueryData>,
}

/// The `data` member of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    /// `"vector"` for instant queries, `"matrix"` for range queries
    #[serde(rename = "resultType")]
    pub result_type: String,
    /// One entry per matching series
    #[serde(default)]
    pub result: Vec<Series>,
}

/// One series in a query result.
///
/// Samples are kept as raw JSON so range values pass through to the caller
/// verbatim, exactly as the store produced them.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    /// Label set identifying the series
    #[serde(default)]
    pub metric: HashMap<String, String>,
    /// Instant sample `[timestamp, "value"]` (instant queries only)
    #[serde(default)]
    pub value: Option<Value>,
    /// Sample list `[[timestamp, "value"], ...]` (range queries only)
    #[serde(default)]
    pub values: Option<Value>,
}

/// Label values scoping every metric query, fixed at startup.
#[derive(Debug, Clone)]
pub struct QueryLabels {
    /// Cluster label
    pub cluster: String,
    /// Environment label
    pub env: String,
    /// Exporter instance label (the directory host:port)
    pub instance: String,
    /// Scrape job label
    pub job: String,
}

/// Default range-query window and step, fixed at startup.
#[derive(Debug, Clone)]
pub struct RangeDefaults {
    /// Start of the window when the request does not specify `from`
    pub from: String,
    /// End of the window when the request does not specify `to`
    pub to: String,
    /// Step between samples when the request does not specify `interval`
    pub interval: String,
}

/// Builds the PromQL selector for `metric` scoped to the configured labels.
pub fn build_selector(metric: &str, labels: &QueryLabels) -> String {
    format!(
        "{}{{cluster=\"{}\", env=\"{}\", instance=\"{}\", job=\"{}\"}}",
        metric, labels.cluster, labels.env, labels.instance, labels.job
    )
}
