//! Service layer for dashboard business logic.
//!
//! Services sit between the HTTP controllers and the marketplace client:
//! they validate input, translate marketplace failures into dashboard errors,
//! and build or read signed sessions.

pub mod auth;
pub mod revenue;
pub mod seller;
