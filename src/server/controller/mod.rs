//! HTTP controller endpoints for the dashboard API.
//!
//! Axum handlers for signing in and out, reading the current session, and the
//! authenticated seller and revenue listings. Handlers validate input, call the
//! service layer, and return `Result<_, Error>` so failures map onto JSON error
//! responses. Every route carries a utoipa annotation for the OpenAPI document.

pub mod auth;
pub mod revenue;
pub mod seller;
pub mod util;
