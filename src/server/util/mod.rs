//! Helpers shared across services and controllers.

pub mod page;
