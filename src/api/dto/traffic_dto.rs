//! Traffic API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::epoch_to_utc;

/// Simulation scenario accepted by `POST /traffic/simulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Normal,
    Dos,
    Fuzzy,
    Spoofing,
    Mixed,
}

impl Scenario {
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Dos => "dos",
            Scenario::Fuzzy => "fuzzy",
            Scenario::Spoofing => "spoofing",
            Scenario::Mixed => "mixed",
        }
    }
}

/// Capture source selected by `POST /traffic/collect/start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    Can,
    Ethernet,
    Pcap,
    Simulator,
    /// Every configured source at once.
    Multi,
}

impl CollectMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectMode::Can => "can",
            CollectMode::Ethernet => "ethernet",
            CollectMode::Pcap => "pcap",
            CollectMode::Simulator => "simulator",
            CollectMode::Multi => "multi",
        }
    }
}

/// Bus protocol filter. Transmitted in the uppercase form the backend
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Can,
    Eth,
    V2x,
}

/// Filters for the packet listing; transmitted verbatim as query
/// parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PacketQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Counters for the stats overview.
#[derive(Debug, Clone, Deserialize)]
pub struct TrafficStats {
    pub total_packets: u64,
    pub can_count: u64,
    pub eth_count: u64,
    pub v2x_count: u64,
    pub time_range_start: Option<f64>,
    pub time_range_end: Option<f64>,
    pub packets_per_second: f64,
}

/// One captured frame as served by the packet listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PacketRecord {
    pub id: i64,
    pub timestamp: f64,
    pub protocol: String,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub msg_id: Option<String>,
    /// Vehicle domain, e.g. powertrain, chassis, body, infotainment.
    pub domain: Option<String>,
    #[serde(default)]
    pub payload_decoded: Value,
}

impl PacketRecord {
    /// Capture instant as UTC.
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.timestamp)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateOutcome {
    pub generated: u64,
    pub scenario: String,
}

/// Counters the collector reports alongside both status and transitions.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorCounters {
    pub total_collected: Option<u64>,
    pub total_anomalies: Option<u64>,
    pub started_at: Option<f64>,
    pub source_mode: Option<String>,
}

impl CollectorCounters {
    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        self.started_at.and_then(epoch_to_utc)
    }
}

/// Answer to `GET /traffic/collect/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorStatus {
    pub running: bool,
    #[serde(flatten)]
    pub counters: CollectorCounters,
}

/// Answer to a collect start/stop call.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorTransition {
    /// `"started"` or `"stopped"`.
    pub status: String,
    pub mode: Option<String>,
    /// Number of sources brought up on start.
    pub sources: Option<u32>,
    #[serde(flatten)]
    pub counters: CollectorCounters,
}
