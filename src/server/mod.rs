//! Server application core modules.
//!
//! The dashboard's backend: an axum application that signs users in against the
//! marketplace, keeps their session in a signed cookie, and proxies the seller
//! and revenue endpoints with the session's bearer token.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
