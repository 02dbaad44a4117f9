//! Request helpers shared by controllers.
//!
//! The [`session::AuthSession`] extractor reads and verifies the signed session
//! for protected endpoints, and [`cookie`] builds the `Set-Cookie` values that
//! store or clear it.

pub mod cookie;
pub mod session;
