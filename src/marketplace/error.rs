use thiserror::Error;

/// Errors returned by [`MarketplaceClient`](super::MarketplaceClient) requests.
#[derive(Error, Debug)]
pub enum Error {
    /// The base URL passed to the client builder is unusable.
    #[error("Invalid marketplace API URL: {0:?}")]
    InvalidUrl(String),
    /// The request never produced a response (connection, TLS, timeout) or the
    /// HTTP client could not be constructed.
    #[error("Failed to reach the marketplace API: {0}")]
    Network(#[from] reqwest::Error),
    /// The marketplace rejected the bearer token (401/403).
    #[error("Marketplace API rejected the session's access token")]
    Unauthorized,
    /// The requested resource does not exist (404).
    #[error("Marketplace API resource not found: {0}")]
    NotFound(String),
    /// Any other non-2xx response.
    #[error("Marketplace API responded with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// A 2xx response whose envelope reported `success: false`.
    #[error("Marketplace API reported a failure: {0}")]
    Application(String),
    /// The response body was not the JSON shape the endpoint documents.
    #[error("Failed to decode marketplace API response: {0}")]
    Decode(#[from] serde_json::Error),
}
