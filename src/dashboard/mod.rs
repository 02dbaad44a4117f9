//! Headless view state for the dashboard pages.
//!
//! The pages render whatever these types hold; all network access goes through
//! the [`source`] traits so the state machines can be driven by the
//! [`MarketplaceClient`](crate::marketplace::MarketplaceClient) in production
//! and by in-memory fakes in tests.
//!
//! Failures never propagate out of a view: they are reported as
//! [`notification::Notification`]s and the view keeps its previous contents.

pub mod delete;
pub mod list;
pub mod notification;
pub mod revenue;
pub mod seller;
pub mod source;

pub use delete::DeleteAction;
pub use list::{FetchOutcome, FetchTicket, ListView};
pub use notification::{Notification, NotificationLevel, Notifications};
pub use revenue::RevenueListView;
pub use seller::SellerListView;

#[cfg(test)]
mod fake;
