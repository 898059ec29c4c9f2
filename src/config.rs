use std::env;

/// Fixed prefix every endpoint path is mounted under on the backend.
pub const API_PREFIX: &str = "/api";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives.
///
/// Passed explicitly to [`ApiClient::new`](crate::ApiClient::new) so tests
/// and multi-backend setups can point at a different origin without any
/// process-global state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`. The [`API_PREFIX`] is
    /// appended by the client; do not include it here.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `GATEWAYGUARD_URL` (dotenv-aware), falling back to the stock
    /// local backend address.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match env::var("GATEWAYGUARD_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Origin plus [`API_PREFIX`], with a trailing slash on the origin
    /// tolerated.
    pub(crate) fn api_root(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_appends_prefix() {
        assert_eq!(
            ClientConfig::new("http://backend.test").api_root(),
            "http://backend.test/api"
        );
    }

    #[test]
    fn api_root_tolerates_trailing_slash() {
        assert_eq!(
            ClientConfig::new("http://backend.test/").api_root(),
            "http://backend.test/api"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8000");
    }
}
