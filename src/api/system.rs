//! System administration endpoints (`/system/*`).

use reqwest::{Method, RequestBuilder};

use crate::api::client::ApiClient;
use crate::api::dto::system_dto::{
    ClearAnomaliesQuery, ClearPacketsQuery, ClearSummary, ClearedData, SystemStatus,
};
use crate::errors::ClientError;

/// Facade over the system capability area. Borrowed from
/// [`ApiClient::system`].
#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /system/status`
    pub async fn status(&self) -> Result<SystemStatus, ClientError> {
        self.client.send_json(self.status_request()).await
    }

    /// `DELETE /system/clear-data`: wipes every table.
    pub async fn clear_data(&self) -> Result<ClearedData, ClientError> {
        self.client.send_json(self.clear_data_request()).await
    }

    /// `DELETE /system/clear-packets`
    pub async fn clear_packets(
        &self,
        query: &ClearPacketsQuery,
    ) -> Result<ClearSummary, ClientError> {
        self.client.send_json(self.clear_packets_request(query)).await
    }

    /// `DELETE /system/clear-anomalies`
    pub async fn clear_anomalies(
        &self,
        query: &ClearAnomaliesQuery,
    ) -> Result<ClearSummary, ClientError> {
        self.client
            .send_json(self.clear_anomalies_request(query))
            .await
    }

    fn status_request(&self) -> RequestBuilder {
        self.client.request(Method::GET, "/system/status")
    }

    fn clear_data_request(&self) -> RequestBuilder {
        self.client.request(Method::DELETE, "/system/clear-data")
    }

    fn clear_packets_request(&self, query: &ClearPacketsQuery) -> RequestBuilder {
        self.client
            .request(Method::DELETE, "/system/clear-packets")
            .query(query)
    }

    fn clear_anomalies_request(&self, query: &ClearAnomaliesQuery) -> RequestBuilder {
        self.client
            .request(Method::DELETE, "/system/clear-anomalies")
            .query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::anomaly_dto::Severity;
    use crate::api::dto::traffic_dto::Protocol;
    use crate::config::ClientConfig;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://backend.test"))
    }

    #[test]
    fn status_is_a_plain_get() {
        let client = client();
        let req = client.system().status_request().build().unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().as_str(), "http://backend.test/api/system/status");
    }

    #[test]
    fn clear_data_uses_delete_with_no_params() {
        let client = client();
        let req = client.system().clear_data_request().build().unwrap();
        assert_eq!(req.method(), &Method::DELETE);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/system/clear-data"
        );
    }

    #[test]
    fn clear_packets_filters_pass_through_verbatim() {
        let client = client();
        let query = ClearPacketsQuery {
            protocol: Some(Protocol::V2x),
            keep_recent: None,
        };
        let req = client
            .system()
            .clear_packets_request(&query)
            .build()
            .unwrap();
        assert_eq!(req.method(), &Method::DELETE);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/system/clear-packets?protocol=V2X"
        );
    }

    #[test]
    fn clear_anomalies_filters_pass_through_verbatim() {
        let client = client();
        let query = ClearAnomaliesQuery {
            severity: Some(Severity::Low),
            keep_recent: Some(1000),
        };
        let req = client
            .system()
            .clear_anomalies_request(&query)
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/system/clear-anomalies?severity=low&keep_recent=1000"
        );
    }
}
