//! Server-only models: application state, validated credentials and session claims.

pub mod app;
pub mod auth;
pub mod session;
