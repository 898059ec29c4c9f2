//! Anomaly event endpoints (`/anomaly/*`).

use reqwest::{Method, RequestBuilder};

use crate::api::client::ApiClient;
use crate::api::dto::anomaly_dto::{
    AnomalyEventDetail, AnomalyEventList, DetectOutcome, EventQuery,
};
use crate::errors::ClientError;

/// How many of the most recent packets a detection run looks at when the
/// caller does not say.
pub const DEFAULT_DETECT_WINDOW: u32 = 500;

/// Facade over the anomaly capability area. Borrowed from
/// [`ApiClient::anomaly`].
#[derive(Debug, Clone, Copy)]
pub struct AnomalyApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnomalyApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /anomaly/events`
    pub async fn events(&self, query: &EventQuery) -> Result<AnomalyEventList, ClientError> {
        self.client.send_json(self.events_request(query)).await
    }

    /// `GET /anomaly/events/{id}`
    pub async fn detail(&self, id: i64) -> Result<AnomalyEventDetail, ClientError> {
        self.client.send_json(self.detail_request(id)).await
    }

    /// `POST /anomaly/detect`: run detection over the most recent traffic.
    /// `window` falls back to [`DEFAULT_DETECT_WINDOW`].
    pub async fn detect(&self, window: Option<u32>) -> Result<DetectOutcome, ClientError> {
        self.client.send_json(self.detect_request(window)).await
    }

    fn events_request(&self, query: &EventQuery) -> RequestBuilder {
        self.client
            .request(Method::GET, "/anomaly/events")
            .query(query)
    }

    fn detail_request(&self, id: i64) -> RequestBuilder {
        self.client
            .request(Method::GET, &format!("/anomaly/events/{id}"))
    }

    fn detect_request(&self, window: Option<u32>) -> RequestBuilder {
        let limit = window.unwrap_or(DEFAULT_DETECT_WINDOW);
        self.client
            .request(Method::POST, "/anomaly/detect")
            .query(&[("limit", limit)])
    }
}
