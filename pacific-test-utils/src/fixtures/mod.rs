//! Fixtures for mock marketplace data and endpoints.

pub mod marketplace;
