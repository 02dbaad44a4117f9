use crate::{
    dashboard::{
        list::{FetchOutcome, ListView},
        notification::{Notifications, REVENUE_FETCH_FAILED},
        source::PageSource,
    },
    model::{api::DEFAULT_PAGE_LIMIT, revenue::Revenue, session::Session},
};

/// State of the admin revenue page.
#[derive(Debug)]
pub struct RevenueListView {
    list: ListView<Revenue>,
}

impl Default for RevenueListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl RevenueListView {
    pub fn new(limit: u32) -> Self {
        Self {
            list: ListView::new(limit).with_failure_message(REVENUE_FETCH_FAILED),
        }
    }

    pub fn list(&self) -> &ListView<Revenue> {
        &self.list
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
        S: PageSource<Revenue> + ?Sized,
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
        S: PageSource<Revenue> + ?Sized,
    {
        self.list
            .refresh_if_stale(source, session, notifications)
            .await
    }

    /// The pager is only shown when there is more than one page.
    pub fn shows_pager(&self) -> bool {
        self.list.has_pages()
    }

    /// Text of the "Showing x of y" footer.
    pub fn showing_label(&self) -> String {
        let (shown, total) = self.list.showing();

        format!("Showing {} of {} Records", shown, total)
    }
}
