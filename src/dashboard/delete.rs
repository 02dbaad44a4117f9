use dioxus_logger::tracing;

use crate::{
    dashboard::{
        notification::{Notifications, SELLER_DELETED, SELLER_DELETE_FAILED},
        source::SellerRemover,
    },
    model::{seller::Seller, session::Session},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Waiting for the user to confirm deleting this seller
    Confirming { id: String, name: String },
}

/// Two-step delete: request, then confirm or cancel.
///
/// Nothing is removed from a list optimistically; the caller re-fetches after a
/// confirmed deletion.
#[derive(Debug, Default)]
pub struct DeleteAction {
    state: DeleteState,
}

impl DeleteAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Opens the confirmation for `seller`, replacing any pending target.
    pub fn request(&mut self, seller: &Seller) {
        self.state = DeleteState::Confirming {
            id: seller.id.clone(),
            name: seller.name.clone(),
        };
    }

    /// Name shown in the confirmation prompt.
    pub fn prompt(&self) -> Option<&str> {
        match &self.state {
            DeleteState::Confirming { name, .. } => Some(name),
            DeleteState::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DeleteState::Idle;
    }

    /// Deletes the pending target, returning to idle whatever the outcome.
    ///
    /// Returns `true` only when the remover confirmed the deletion. Confirming
    /// with nothing pending does nothing and returns `false`.
    pub async fn confirm<R>(
        &mut self,
        remover: &R,
        session: &Session,
        notifications: &mut Notifications,
    ) -> bool
    where
        R: SellerRemover + ?Sized,
    {
        let DeleteState::Confirming { id, .. } = std::mem::take(&mut self.state) else {
            return false;
        };

        match remover.remove(session, &id).await {
            Ok(()) => {
                notifications.push_success(SELLER_DELETED);

                true
            }
            Err(err) => {
                tracing::warn!("Failed to delete seller {}: {}", id, err);
                notifications.push_error(SELLER_DELETE_FAILED);

                false
            }
        }
    }
}
