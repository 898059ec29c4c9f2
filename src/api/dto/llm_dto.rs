//! LLM API DTOs

use serde::Deserialize;
use serde_json::Value;

/// Answer to `POST /llm/analyze`. The analysis itself is whatever the model
/// produced.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeOutcome {
    pub event_id: i64,
    pub analysis: Value,
}

/// Answer to `POST /llm/report`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportOutcome {
    pub report: Value,
}

/// Answer to `POST /llm/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Session handle to pass back on the next turn. Minted by the backend
    /// when the request carried none.
    pub session_id: String,
    pub response: String,
    pub tool_calls: Option<Value>,
}
