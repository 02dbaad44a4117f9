use crate::{
    dashboard::{
        delete::{DeleteAction, DeleteState},
        list::{FetchOutcome, ListView},
        notification::{Notifications, SELLERS_FETCH_FAILED},
        source::{PageSource, SellerRemover},
    },
    model::{api::DEFAULT_PAGE_LIMIT, seller::Seller, session::Session},
};

/// State of the sellers page: the paginated table, the details modal and the
/// delete confirmation.
#[derive(Debug)]
pub struct SellerListView {
    list: ListView<Seller>,
    delete: DeleteAction,
    selected: Option<String>,
}

impl Default for SellerListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl SellerListView {
    pub fn new(limit: u32) -> Self {
        Self {
            list: ListView::new(limit).with_failure_message(SELLERS_FETCH_FAILED),
            delete: DeleteAction::new(),
            selected: None,
        }
    }

    pub fn list(&self) -> &ListView<Seller> {
        &self.list
    }

    pub fn delete_action(&self) -> &DeleteAction {
        &self.delete
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        self.list.set_page(page)
    }

    pub async fn fetch<S>(
        &mut self,
        source: &S,
        session: &Session,
        notifications: &mut Notifications,
    ) -> FetchOutcome
    where
        S: PageSource<Seller> + ?Sized,
    {
        self.list.fetch(source, session, notifications).await
    }

    pub async fn refresh_if_stale<S>(
        &mut self,
        source: &S,
        session: &Session,
        notifications: &mut Notifications,
    ) -> Option<FetchOutcome>
    where
        S: PageSource<Seller> + ?Sized,
    {
        self.list
            .refresh_if_stale(source, session, notifications)
            .await
    }

    /// Opens the details modal for a seller on the current page.
    ///
    /// Returns `false` when no seller with `id` is shown.
    pub fn select(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }

        self.selected = Some(id.to_string());

        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Seller shown in the details modal.
    pub fn selected(&self) -> Option<&Seller> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    /// Opens the delete confirmation for a seller on the current page.
    pub fn request_delete(&mut self, id: &str) -> bool {
        let Some(seller) = self.list.records().iter().find(|s| s.id == id) else {
            return false;
        };

        self.delete.request(seller);

        true
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Confirms the pending delete; on success the list is re-fetched.
    ///
    /// Returns whether the seller was deleted.
    pub async fn confirm_delete<C>(
        &mut self,
        client: &C,
        session: &Session,
        notifications: &mut Notifications,
    ) -> bool
    where
        C: PageSource<Seller> + SellerRemover + ?Sized,
    {
        let pending = match self.delete.state() {
            DeleteState::Confirming { id, .. } => Some(id.clone()),
            DeleteState::Idle => None,
        };

        if !self.delete.confirm(client, session, notifications).await {
            return false;
        }

        if self.selected.is_some() && self.selected == pending {
            self.selected = None;
        }

        self.list.invalidate();
        self.list
            .refresh_if_stale(client, session, notifications)
            .await;

        true
    }

    fn find(&self, id: &str) -> Option<&Seller> {
        self.list.records().iter().find(|seller| seller.id == id)
    }
}
