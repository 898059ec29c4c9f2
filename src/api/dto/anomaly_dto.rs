//! Anomaly API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::epoch_to_utc;

/// Event severity filter. Responses carry severity as free text since the
/// detector may grow new levels; requests stick to the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Filters for the event listing; transmitted verbatim as query parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Workflow state, e.g. `"open"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// One event as served by the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyEvent {
    pub id: i64,
    pub timestamp: f64,
    pub anomaly_type: String,
    pub severity: String,
    pub confidence: Option<f64>,
    pub protocol: Option<String>,
    pub source_node: Option<String>,
    pub target_node: Option<String>,
    pub description: Option<String>,
    /// `"rule"` or `"ml"` engine that raised the event.
    pub detection_method: Option<String>,
    pub status: Option<String>,
}

impl AnomalyEvent {
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.timestamp)
    }
}

/// Answer to `GET /anomaly/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyEventList {
    pub total: u64,
    pub events: Vec<AnomalyEvent>,
}

/// Answer to `GET /anomaly/events/{id}`: the listing fields plus the raw
/// evidence attached at detection time.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyEventDetail {
    #[serde(flatten)]
    pub event: AnomalyEvent,
    pub raw_data: Option<Value>,
}

/// One freshly raised alert inside a [`DetectOutcome`].
#[derive(Debug, Clone, Deserialize)]
pub struct DetectedAlert {
    pub anomaly_type: String,
    pub severity: String,
    pub confidence: Option<f64>,
    pub description: Option<String>,
}

/// Answer to `POST /anomaly/detect`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectOutcome {
    pub detected: u64,
    #[serde(default)]
    pub alerts: Vec<DetectedAlert>,
    /// Set when there was no traffic to run detection over.
    pub message: Option<String>,
}
