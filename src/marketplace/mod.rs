//! Client for the remote marketplace REST API.
//!
//! The marketplace owns all seller and revenue data; the dashboard only ever
//! reads it through this client, authorizing every call except login with the
//! bearer token carried by an explicit [`Session`](crate::model::session::Session).

pub mod auth;
pub mod error;
pub mod model;
pub mod revenue;
pub mod seller;

pub use error::Error;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use self::model::Envelope;

/// Default `User-Agent` sent to the marketplace.
pub const DEFAULT_USER_AGENT: &str = concat!("pacific-admin/", env!("CARGO_PKG_VERSION"));

/// Message used when the marketplace reports a failure without explaining it.
const UNSPECIFIED_FAILURE: &str = "The marketplace API did not report a reason";

/// Async HTTP client for the marketplace API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    base_url: String,
}

/// Builder for [`MarketplaceClient`].
#[derive(Default)]
pub struct MarketplaceClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl MarketplaceClientBuilder {
    /// Base URL of the marketplace API, e.g. `https://api.example.com/api/v1`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the base URL and builds the underlying HTTP client.
    ///
    /// # Returns
    /// - `Ok(MarketplaceClient)` - Client ready to issue requests
    /// - `Err(Error::InvalidUrl)` - Base URL missing or not an `http(s)://` URL
    /// - `Err(Error::Network)` - The HTTP client could not be initialized
    pub fn build(self) -> Result<MarketplaceClient, Error> {
        let base_url = self.base_url.unwrap_or_default();
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let has_scheme = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());
        if !has_scheme {
            return Err(Error::InvalidUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()?;

        Ok(MarketplaceClient { http, base_url })
    }
}

impl MarketplaceClient {
    pub fn builder() -> MarketplaceClientBuilder {
        MarketplaceClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads a JSON envelope from a response, mapping HTTP and application
    /// level failures onto [`Error`].
    async fn read_envelope<T: DeserializeOwned>(
        response: Response,
        path: &str,
    ) -> Result<Envelope<T>, Error> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &body, path));
        }

        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(Error::Application(
                envelope
                    .message
                    .unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string()),
            ));
        }

        Ok(envelope)
    }
}

/// Maps a non-2xx response onto an error, keeping the server's message when
/// the body is a JSON envelope.
fn status_error(status: StatusCode, body: &[u8], path: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized,
        StatusCode::NOT_FOUND => Error::NotFound(path.to_string()),
        status => Error::Status {
            status: status.as_u16(),
            message: serde_json::from_slice::<Envelope<serde::de::IgnoredAny>>(body)
                .ok()
                .and_then(|envelope| envelope.message),
        },
    }
}
