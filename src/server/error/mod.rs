//! Error types for the dashboard server.
//!
//! Domain-specific errors (authentication, configuration, validation) and the
//! marketplace client's error are aggregated into [`Error`]. Every error
//! implements `IntoResponse` so handlers can return `Result<_, Error>` and use
//! `?` throughout.

pub mod auth;
pub mod config;
pub mod marketplace;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    marketplace::Error as MarketplaceError,
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the dashboard server.
///
/// Uses `thiserror`'s `#[from]` so domain errors convert with `?`. The
/// `IntoResponse` implementation delegates to each domain error's own mapping
/// and treats everything else as an internal server error.
///
/// # Error Categories
/// - Validation errors (missing credentials, bad pagination, empty IDs)
/// - Authentication errors (rejected credentials, missing or expired session)
/// - Marketplace errors (network failures, non-2xx statuses, `success: false`)
/// - Configuration and session signing errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request input failed validation before any marketplace call.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Authentication error (credentials rejected, session missing/invalid/expired).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Marketplace API error (network, status, application or decode failure).
    #[error(transparent)]
    MarketplaceError(#[from] MarketplaceError),
    /// Failed to sign a session token.
    #[error("Failed to sign session token: {0}")]
    SessionSigningError(#[from] jsonwebtoken::errors::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Rejected credentials, missing/invalid/expired sessions
/// - 404 Not Found - Marketplace resource missing
/// - 502 Bad Gateway - Marketplace unreachable or reporting failure
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MarketplaceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to
/// the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
