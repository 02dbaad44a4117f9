//! Data transfer objects shared between the server API and the dashboard view state.

pub mod api;
pub mod auth;
pub mod revenue;
pub mod seller;
pub mod session;
