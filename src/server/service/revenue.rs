use dioxus_logger::tracing;

use crate::{
    marketplace::MarketplaceClient,
    model::{
        api::{PageDto, PageQuery},
        revenue::Revenue,
        session::Session,
    },
    server::{error::Error, util::page::validate_page_query},
};

/// Service for reading admin revenue records.
pub struct RevenueService<'a> {
    marketplace: &'a MarketplaceClient,
}

impl<'a> RevenueService<'a> {
    pub fn new(marketplace: &'a MarketplaceClient) -> Self {
        Self { marketplace }
    }

    /// Fetches one page of admin revenue records.
    ///
    /// # Returns
    /// - `Ok(PageDto<Revenue>)` - Revenue rows with resolved pagination
    /// - `Err(Error::ValidationError)` - Page or limit out of range, no request made
    /// - `Err(Error::MarketplaceError)` - Marketplace request failed
    pub async fn list(
        &self,
        session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Revenue>, Error> {
        let query = validate_page_query(query)?;

        self.marketplace
            .list_revenue(session, query)
            .await
            .map_err(|err| {
                tracing::warn!("Failed to fetch revenue page {}: {}", query.page, err);

                err.into()
            })
    }
}
