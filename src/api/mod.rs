//! API client facade (endpoints grouped by capability area).

pub mod client;
pub mod dto;

pub mod anomaly;
pub mod llm;
pub mod system;
pub mod traffic;
