use crate::model::{
    api::{PageDto, PageQuery, Pagination},
    revenue::Revenue,
    session::Session,
};

use super::{model::Envelope, Error, MarketplaceClient};

// Path spelling matches the marketplace route.
const REVENUE_PATH: &str = "/admin/admin-reveneu";

impl MarketplaceClient {
    /// Fetches one page of admin revenue records.
    ///
    /// Uses the response's `pagination` object when present; otherwise the
    /// returned rows are the whole listing and pagination is derived from them.
    pub async fn list_revenue(
        &self,
        session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Revenue>, Error> {
        let response = self
            .http
            .get(self.url(REVENUE_PATH))
            .bearer_auth(session.access_token())
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;

        let envelope: Envelope<Vec<Revenue>> = Self::read_envelope(response, REVENUE_PATH).await?;
        let rows = envelope.data.unwrap_or_default();
        let pagination = match &envelope.pagination {
            Some(raw) => raw.resolve(query),
            None => Pagination::new(rows.len() as u64, query.page, query.limit),
        };

        Ok(PageDto::new(rows, pagination))
    }
}
