//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, against a mock marketplace.

mod auth;
mod revenue;
mod seller;

use axum::{body::to_bytes, response::Response};
use pacific_admin::{
    model::session::Session, server::service::auth::session::SessionService,
};
use pacific_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::util::TestContextExt;

/// Reads a JSON response body.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

/// Session the test admin holds after signing in.
fn signed_in_session(test: &TestContext) -> Session {
    let config = test.session_config();

    SessionService::new(&config)
        .read(&test.session_token())
        .expect("Failed to read test session")
}
