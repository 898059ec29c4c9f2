use reqwest::StatusCode;
use thiserror::Error;

/// Everything a facade call can fail with. No retry or recovery happens in
/// this crate; callers decide what to do with each variant.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failures, request-build failures, and body-decode failures
    /// from the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. The body is carried as
    /// raw text so backend-reported error payloads reach the caller intact.
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}
