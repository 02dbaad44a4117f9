use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Message used when the marketplace rejects a login without explaining why.
pub const DEFAULT_INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Error, Debug)]
pub enum AuthError {
    /// The marketplace rejected the credential pair; carries the message to show
    /// on the login form.
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("No session token present in request")]
    SessionMissing,
    #[error("Session token failed verification")]
    SessionInvalid,
    #[error("Session token has expired")]
    SessionExpired,
}

impl AuthError {
    pub fn invalid_credentials(message: Option<String>) -> Self {
        Self::InvalidCredentials(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INVALID_CREDENTIALS.to_string()),
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials(message) => {
                tracing::debug!("Login rejected by marketplace: {}", message);

                error_response(StatusCode::UNAUTHORIZED, message)
            }
            err => {
                tracing::debug!("{}", err);

                error_response(StatusCode::UNAUTHORIZED, "Not authenticated")
            }
        }
    }
}
