use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::MAX_PAGE_LIMIT, server::error::error_response};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Page must be 1 or greater")]
    InvalidPage,
    #[error("Limit {0} must be between 1 and {max}", max = MAX_PAGE_LIMIT)]
    InvalidLimit(u32),
    #[error("Seller ID is required")]
    MissingSellerId,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request input: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
