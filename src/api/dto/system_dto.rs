//! System API DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::anomaly_dto::Severity;
use super::traffic_dto::Protocol;

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorFlags {
    pub rule_enabled: bool,
    pub ml_enabled: bool,
}

/// Answer to `GET /system/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStatus {
    pub status: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub detector: DetectorFlags,
}

/// Answer to `DELETE /system/clear-data`: rows removed per table.
#[derive(Debug, Clone, Deserialize)]
pub struct ClearedData {
    pub cleared: BTreeMap<String, u64>,
    pub message: String,
}

/// Answer to the partial clear endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ClearSummary {
    pub deleted: u64,
    pub remaining: u64,
    pub message: String,
}

/// Filters for `DELETE /system/clear-packets`; transmitted verbatim. The
/// backend requires at least one of the two.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearPacketsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Keep only the newest N packets, deleting the rest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_recent: Option<u32>,
}

/// Filters for `DELETE /system/clear-anomalies`; transmitted verbatim. The
/// backend requires at least one of the two.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearAnomaliesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Keep only the newest N events, deleting the rest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_recent: Option<u32>,
}
