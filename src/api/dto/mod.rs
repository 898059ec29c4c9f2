//! Wire types for the backend API, grouped by capability area.
//!
//! Query structs are transmitted verbatim; optional fields are simply
//! omitted when unset. Response structs mirror what the backend serves;
//! free-form sections (LLM output, decoded payloads, raw event data) stay
//! [`serde_json::Value`].

pub mod anomaly_dto;
pub mod llm_dto;
pub mod system_dto;
pub mod traffic_dto;

use chrono::{DateTime, Utc};

/// The backend transmits instants as epoch-seconds floats.
pub(crate) fn epoch_to_utc(secs: f64) -> Option<DateTime<Utc>> {
    let whole = secs.trunc() as i64;
    let nanos = (secs.fract() * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_to_utc_keeps_subsecond_precision() {
        let ts = epoch_to_utc(1_700_000_000.25).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.timestamp_subsec_millis(), 250);
    }
}
