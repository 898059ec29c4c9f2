//! Traffic capture and simulation endpoints (`/traffic/*`).

use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::dto::traffic_dto::{
    CollectMode, CollectorStatus, CollectorTransition, PacketQuery, PacketRecord, Scenario,
    SimulateOutcome, TrafficStats,
};
use crate::errors::ClientError;

/// Facade over the traffic capability area. Borrowed from
/// [`ApiClient::traffic`].
#[derive(Debug, Clone, Copy)]
pub struct TrafficApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrafficApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /traffic/stats`
    pub async fn stats(&self) -> Result<TrafficStats, ClientError> {
        self.client.send_json(self.stats_request()).await
    }

    /// `GET /traffic/packets`
    pub async fn packets(&self, query: &PacketQuery) -> Result<Vec<PacketRecord>, ClientError> {
        self.client.send_json(self.packets_request(query)).await
    }

    /// `POST /traffic/simulate`
    pub async fn simulate(
        &self,
        scenario: Scenario,
        count: u32,
    ) -> Result<SimulateOutcome, ClientError> {
        self.client
            .send_json(self.simulate_request(scenario, count))
            .await
    }

    /// `POST /traffic/collect/start`. With `None` the backend falls back to
    /// its configured default source; the `mode` parameter is omitted
    /// entirely, never sent empty.
    pub async fn collect_start(
        &self,
        mode: Option<CollectMode>,
    ) -> Result<CollectorTransition, ClientError> {
        self.client.send_json(self.collect_start_request(mode)).await
    }

    /// `POST /traffic/collect/stop`
    pub async fn collect_stop(&self) -> Result<CollectorTransition, ClientError> {
        self.client.send_json(self.collect_stop_request()).await
    }

    /// `GET /traffic/collect/status`
    pub async fn collect_status(&self) -> Result<CollectorStatus, ClientError> {
        self.client.send_json(self.collect_status_request()).await
    }

    /// `POST /traffic/import`. The file path lives on the backend host and
    /// is percent-encoded into the query string.
    pub async fn import_capture(&self, file_path: &str) -> Result<Value, ClientError> {
        self.client
            .send_json(self.import_capture_request(file_path))
            .await
    }

    fn stats_request(&self) -> RequestBuilder {
        self.client.request(Method::GET, "/traffic/stats")
    }

    fn packets_request(&self, query: &PacketQuery) -> RequestBuilder {
        self.client
            .request(Method::GET, "/traffic/packets")
            .query(query)
    }

    fn simulate_request(&self, scenario: Scenario, count: u32) -> RequestBuilder {
        self.client
            .request(Method::POST, "/traffic/simulate")
            .query(&[("scenario", scenario.as_str().to_string()), ("count", count.to_string())])
    }

    fn collect_start_request(&self, mode: Option<CollectMode>) -> RequestBuilder {
        let builder = self.client.request(Method::POST, "/traffic/collect/start");
        match mode {
            Some(mode) => builder.query(&[("mode", mode.as_str())]),
            None => builder,
        }
    }

    fn collect_stop_request(&self) -> RequestBuilder {
        self.client.request(Method::POST, "/traffic/collect/stop")
    }

    fn collect_status_request(&self) -> RequestBuilder {
        self.client.request(Method::GET, "/traffic/collect/status")
    }

    fn import_capture_request(&self, file_path: &str) -> RequestBuilder {
        let path = format!("/traffic/import?file_path={}", urlencoding::encode(file_path));
        self.client.request(Method::POST, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::traffic_dto::Protocol;
    use crate::config::ClientConfig;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://backend.test"))
    }

    #[test]
    fn stats_is_a_plain_get() {
        let client = client();
        let req = client.traffic().stats_request().build().unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().as_str(), "http://backend.test/api/traffic/stats");
    }

    #[test]
    fn packet_filters_pass_through_verbatim() {
        let client = client();
        let query = PacketQuery {
            protocol: Some(Protocol::Can),
            limit: Some(50),
            offset: None,
        };
        let req = client.traffic().packets_request(&query).build().unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/traffic/packets?protocol=CAN&limit=50"
        );
    }

    #[test]
    fn empty_packet_query_emits_no_question_mark() {
        let client = client();
        let req = client
            .traffic()
            .packets_request(&PacketQuery::default())
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "http://backend.test/api/traffic/packets");
    }

    #[test]
    fn simulate_carries_scenario_and_count() {
        let client = client();
        let req = client
            .traffic()
            .simulate_request(Scenario::Dos, 200)
            .build()
            .unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/traffic/simulate?scenario=dos&count=200"
        );
    }

    #[test]
    fn collect_start_omits_mode_when_unset() {
        let client = client();
        let req = client.traffic().collect_start_request(None).build().unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/traffic/collect/start"
        );
    }

    #[test]
    fn collect_start_sends_mode_when_set() {
        let client = client();
        let req = client
            .traffic()
            .collect_start_request(Some(CollectMode::Simulator))
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://backend.test/api/traffic/collect/start?mode=simulator"
        );
    }

    #[test]
    fn collect_stop_and_status_hit_fixed_paths() {
        let client = client();
        let stop = client.traffic().collect_stop_request().build().unwrap();
        assert_eq!(stop.method(), &Method::POST);
        assert_eq!(
            stop.url().as_str(),
            "http://backend.test/api/traffic/collect/stop"
        );

        let status = client.traffic().collect_status_request().build().unwrap();
        assert_eq!(status.method(), &Method::GET);
        assert_eq!(
            status.url().as_str(),
            "http://backend.test/api/traffic/collect/status"
        );
    }

    #[test]
    fn import_percent_encodes_the_file_path() {
        let client = client();
        let req = client
            .traffic()
            .import_capture_request("a b.pcap")
            .build()
            .unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.url().query(), Some("file_path=a%20b.pcap"));
    }

    #[test]
    fn import_encodes_path_separators() {
        let client = client();
        let req = client
            .traffic()
            .import_capture_request("/tmp/run 1/capture.blf")
            .build()
            .unwrap();
        assert_eq!(
            req.url().query(),
            Some("file_path=%2Ftmp%2Frun%201%2Fcapture.blf")
        );
    }
}
