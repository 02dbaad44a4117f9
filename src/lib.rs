//! Administrative dashboard for the Pacific farm marketplace.
//!
//! The crate is split into four layers:
//! - [`model`] - DTOs shared by the server API and the dashboard view state
//! - [`marketplace`] - typed HTTP client for the remote marketplace REST API
//! - [`server`] - axum application serving the dashboard API and owning the session flow
//! - [`dashboard`] - headless list/mutation view state driven by the dashboard pages

pub mod dashboard;
pub mod marketplace;
pub mod model;
pub mod server;
