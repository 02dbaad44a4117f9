use dioxus_logger::tracing;

use crate::{
    dashboard::{notification::Notifications, source::PageSource},
    marketplace::Error,
    model::{
        api::{PageDto, PageQuery, Pagination},
        session::Session,
    },
};

const DEFAULT_FETCH_FAILED: &str = "An error occurred while fetching data.";

/// Identifies one in-flight page fetch.
///
/// Sequence numbers increase with every [`ListView::begin_fetch`]; only the
/// ticket with the latest number may change the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: PageQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> PageQuery {
        self.query
    }
}

/// What [`ListView::apply`] did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records and pagination replaced
    Applied,
    /// A newer fetch was issued; the response was discarded
    Stale,
    /// The fetch failed; previous records kept and an error notification pushed
    Failed,
}

/// Paginated list of records backed by a [`PageSource`].
#[derive(Debug)]
pub struct ListView<T> {
    page: u32,
    limit: u32,
    records: Vec<T>,
    pagination: Pagination,
    loading: bool,
    stale: bool,
    issued: u64,
    failure_message: &'static str,
}

impl<T> ListView<T> {
    /// Empty view on page 1, loading and due for its first fetch.
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            records: Vec::new(),
            pagination: Pagination::empty(limit),
            loading: true,
            stale: true,
            issued: 0,
            failure_message: DEFAULT_FETCH_FAILED,
        }
    }

    /// Message pushed when a fetch fails.
    pub fn with_failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Moves to page `page`, marking the view stale.
    ///
    /// Returns `false` without changing anything for page 0 or the current page.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.page {
            return false;
        }

        self.page = page;
        self.stale = true;

        true
    }

    /// Marks the current page for re-fetching.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Issues a ticket for fetching the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;

        FetchTicket {
            seq: self.issued,
            query: PageQuery::new(self.page, self.limit),
        }
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// Responses to superseded tickets are discarded untouched. For the latest
    /// ticket, loading and the stale flag clear whatever the outcome; a failure
    /// keeps the previous records and pagination.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageDto<T>, Error>,
        notifications: &mut Notifications,
    ) -> FetchOutcome {
        if ticket.seq != self.issued {
            tracing::debug!(
                "Discarding response for page {} (fetch {} superseded by {})",
                ticket.query.page,
                ticket.seq,
                self.issued
            );

            return FetchOutcome::Stale;
        }

        self.loading = false;
        self.stale = false;

        match result {
            Ok(page) => {
                self.records = page.records;
                self.pagination = page.pagination;

                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!("Failed to fetch page {}: {}", ticket.query.page, err);
                notifications.push_error(self.failure_message);

                FetchOutcome::Failed
            }
        }
    }

    /// Fetches the current page from `source` and applies the result.
    pub async fn fetch<S>(
        &mut self,
        source: &S,
        session: &Session,
        notifications: &mut Notifications,
    ) -> FetchOutcome
    where
        S: PageSource<T> + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = source.fetch_page(session, ticket.query).await;

        self.apply(ticket, result, notifications)
    }

    /// Fetches only when the view is stale; returns `None` when nothing was fetched.
    pub async fn refresh_if_stale<S>(
        &mut self,
        source: &S,
        session: &Session,
        notifications: &mut Notifications,
    ) -> Option<FetchOutcome>
    where
        S: PageSource<T> + ?Sized,
    {
        if !self.stale {
            return None;
        }

        Some(self.fetch(source, session, notifications).await)
    }

    /// Whether the listing spans more than one page.
    pub fn has_pages(&self) -> bool {
        self.pagination.total > u64::from(self.pagination.limit)
    }

    /// `(records shown, total records)` for a "Showing x of y" label.
    pub fn showing(&self) -> (usize, u64) {
        (self.records.len(), self.pagination.total)
    }
}
