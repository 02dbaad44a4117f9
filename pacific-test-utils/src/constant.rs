//! Placeholder values shared by every test.
//!
//! None of these are real credentials; they only have to agree between the
//! mock marketplace endpoints and the assertions made against them.

/// User agent sent by test marketplace clients.
pub static TEST_USER_AGENT: &str = "pacific-admin-tests/1.0 (contact@example.com)";

/// HMAC secret for signing test session tokens, long enough to pass config validation.
pub static TEST_SESSION_SECRET: &str = "test-session-secret-0123456789abcdef";

pub static TEST_EMAIL: &str = "admin@example.com";

pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Marketplace user ID returned by the mock login endpoint.
pub static TEST_USER_ID: &str = "665f1c2e9b1e4a0012ab34cd";

pub static TEST_ROLE: &str = "admin";

pub static TEST_FARM: &str = "665f1c2e9b1e4a0012ab99ff";

/// Bearer token issued by the mock login endpoint and expected by the mock
/// admin endpoints.
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

pub static TEST_REFRESH_TOKEN: &str = "test-refresh-token";
