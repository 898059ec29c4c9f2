//! Client-side surface of GatewayGuard: a typed async facade over the
//! backend REST API (traffic capture, anomaly events, LLM analysis, system
//! administration) plus the static page-route table consulted by the UI
//! shell.
//!
//! The backend does the actual capture and detection work; this crate only
//! shapes requests and decodes the documented wire format. Each facade call
//! issues exactly one HTTP request (no caching, retries, or rate limiting)
//! and every failure (transport or non-2xx status) propagates to the caller
//! as a [`ClientError`].
//!
//! ```no_run
//! use gatewayguard_client::{ApiClient, ClientConfig};
//!
//! # async fn demo() -> Result<(), gatewayguard_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::from_env());
//! let stats = client.traffic().stats().await?;
//! println!("{} packets captured", stats.total_packets);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod nav;

pub use api::client::ApiClient;
pub use config::ClientConfig;
pub use errors::ClientError;
