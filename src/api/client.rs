use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::anomaly::AnomalyApi;
use crate::api::llm::LlmApi;
use crate::api::system::SystemApi;
use crate::api::traffic::TrafficApi;
use crate::config::ClientConfig;
use crate::errors::ClientError;

/// Shared HTTP plumbing for the four capability-area facades.
///
/// One `reqwest::Client` (and therefore one connection pool) serves every
/// call. Each facade method issues exactly one request; concurrent calls are
/// independent futures with no ordering between them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_root: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Reuse an externally configured `reqwest::Client` (custom TLS, proxy,
    /// connection limits).
    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        Self {
            http,
            api_root: config.api_root(),
        }
    }

    /// Traffic capture and simulation endpoints (`/traffic/*`).
    pub fn traffic(&self) -> TrafficApi<'_> {
        TrafficApi::new(self)
    }

    /// Anomaly event endpoints (`/anomaly/*`).
    pub fn anomaly(&self) -> AnomalyApi<'_> {
        AnomalyApi::new(self)
    }

    /// LLM analysis endpoints (`/llm/*`).
    pub fn llm(&self) -> LlmApi<'_> {
        LlmApi::new(self)
    }

    /// System administration endpoints (`/system/*`).
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Start a request against `{base_url}/api{path}`. `path` may carry a
    /// pre-encoded query string.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_root, path))
    }

    /// Issue a request and surface non-2xx statuses as
    /// [`ClientError::Status`] with the raw body text.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let request = builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "issuing backend request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }
        Ok(response)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        Ok(self.send(builder).await?.json().await?)
    }
}
