//! LLM analysis endpoints (`/llm/*`).

use reqwest::{Method, RequestBuilder};
use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::api::dto::llm_dto::{AnalyzeOutcome, ChatReply, ReportOutcome};
use crate::errors::ClientError;

/// How many recent anomaly events a generated report covers when the caller
/// does not say.
pub const DEFAULT_REPORT_WINDOW: u32 = 10;

/// Facade over the LLM capability area. Borrowed from [`ApiClient::llm`].
#[derive(Debug, Clone, Copy)]
pub struct LlmApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LlmApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /llm/analyze`: semantic analysis of one anomaly event.
    pub async fn analyze(&self, event_id: i64) -> Result<AnalyzeOutcome, ClientError> {
        self.client.send_json(self.analyze_request(event_id)).await
    }

    /// `POST /llm/report`: alert report over the most recent events.
    /// `window` falls back to [`DEFAULT_REPORT_WINDOW`].
    pub async fn report(&self, window: Option<u32>) -> Result<ReportOutcome, ClientError> {
        self.client.send_json(self.report_request(window)).await
    }

    /// `POST /llm/chat`. Parameters travel in the query string; the body is
    /// empty. Without a `session_id` the backend mints one and returns it in
    /// the reply; pass it back to keep conversation history.
    pub async fn chat(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ClientError> {
        self.client
            .send_json(self.chat_request(message, session_id))
            .await
    }

    /// Mint a session handle for [`chat`](Self::chat), in the same 8-hex-char
    /// form the backend mints when none is supplied.
    pub fn new_session_id() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    fn analyze_request(&self, event_id: i64) -> RequestBuilder {
        self.client
            .request(Method::POST, "/llm/analyze")
            .query(&[("event_id", event_id)])
    }

    fn report_request(&self, window: Option<u32>) -> RequestBuilder {
        let limit = window.unwrap_or(DEFAULT_REPORT_WINDOW);
        self.client
            .request(Method::POST, "/llm/report")
            .query(&[("limit", limit)])
    }

    fn chat_request(&self, message: &str, session_id: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(Method::POST, "/llm/chat")
            .query(&[("message", message)]);
        match session_id {
            Some(sid) => builder.query(&[("session_id", sid)]),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://backend.test"))
    }

    #[test]
    fn analyze_targets_one_event() {
        let client = client();
        let req = client.llm().analyze_request(7).build().unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/llm/analyze?event_id=7"
        );
    }

    #[test]
    fn report_defaults_the_window() {
        let client = client();
        let req = client.llm().report_request(None).build().unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/llm/report?limit=10"
        );
    }

    #[test]
    fn chat_sends_query_params_and_an_empty_body() {
        let client = client();
        let req = client
            .llm()
            .chat_request("hi", Some("s1"))
            .build()
            .unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/llm/chat?message=hi&session_id=s1"
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn chat_omits_the_session_when_unset() {
        let client = client();
        let req = client.llm().chat_request("hi", None).build().unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/llm/chat?message=hi"
        );
    }

    #[test]
    fn minted_session_ids_are_short_and_unique() {
        let a = LlmApi::new_session_id();
        let b = LlmApi::new_session_id();
        assert_eq!(a.len(), 8);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
