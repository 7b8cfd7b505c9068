/// Failure taxonomy for the quote provider boundary
///
/// Every variant is recovered transparently by the fallback chain; none of
/// these cross into the endpoint layer as an HTTP error.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure or request deadline expiry (reqwest carries both)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the provider
    #[error("upstream HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}
