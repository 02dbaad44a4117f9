use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::{marketplace::Error, server::error::error_response};

/// Maps marketplace failures onto dashboard responses.
///
/// Failures are logged by the service that made the request, which knows the
/// page or seller involved; only a misconfigured client is logged here.
///
/// # Returns
/// - 401 Unauthorized - The marketplace rejected the session's access token
/// - 404 Not Found - The marketplace resource does not exist
/// - 502 Bad Gateway - Network failures, unexpected statuses, `success: false`
///   (with the marketplace's message) or undecodable bodies
/// - 500 Internal Server Error - Misconfigured client
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => error_response(
                StatusCode::UNAUTHORIZED,
                "Your session has expired, please log in again.",
            ),
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Not found"),
            Self::Application(message) => error_response(StatusCode::BAD_GATEWAY, message),
            Self::InvalidUrl(_) => super::InternalServerError(self).into_response(),
            _ => error_response(
                StatusCode::BAD_GATEWAY,
                "The marketplace API is unavailable, please try again.",
            ),
        }
    }
}
