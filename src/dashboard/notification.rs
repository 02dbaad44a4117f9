use std::collections::VecDeque;

pub const SELLERS_FETCH_FAILED: &str = "An error occurred while fetching sellers.";
pub const REVENUE_FETCH_FAILED: &str = "An error occurred while fetching revenue data.";
pub const SELLER_DELETED: &str = "Seller deleted successfully";
pub const SELLER_DELETE_FAILED: &str = "Failed to delete seller";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Queue of notifications pushed by views and drained by the presenter, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message);
    }

    fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.queue.push_back(Notification {
            level,
            message: message.into(),
        });
    }

    /// Removes and returns every queued notification.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.queue.back()
    }
}
