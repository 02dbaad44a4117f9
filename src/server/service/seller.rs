use dioxus_logger::tracing;

use crate::{
    marketplace::MarketplaceClient,
    model::{
        api::{PageDto, PageQuery},
        seller::Seller,
        session::Session,
    },
    server::{
        error::{validation::ValidationError, Error},
        util::page::validate_page_query,
    },
};

/// Service for reading and deleting marketplace sellers on behalf of a session.
pub struct SellerService<'a> {
    marketplace: &'a MarketplaceClient,
}

impl<'a> SellerService<'a> {
    pub fn new(marketplace: &'a MarketplaceClient) -> Self {
        Self { marketplace }
    }

    /// Fetches one page of sellers.
    ///
    /// # Arguments
    /// - `session` - Session whose access token authorizes the request
    /// - `query` - Requested page and limit
    ///
    /// # Returns
    /// - `Ok(PageDto<Seller>)` - Sellers on the page with resolved pagination
    /// - `Err(Error::ValidationError)` - Page or limit out of range, no request made
    /// - `Err(Error::MarketplaceError)` - Marketplace request failed
    pub async fn list(&self, session: &Session, query: PageQuery) -> Result<PageDto<Seller>, Error> {
        let query = validate_page_query(query)?;

        self.marketplace
            .list_sellers(session, query)
            .await
            .map_err(|err| {
                tracing::warn!(
                    "Failed to fetch sellers page {} (limit {}): {}",
                    query.page,
                    query.limit,
                    err
                );

                err.into()
            })
    }

    /// Deletes the seller with `seller_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Marketplace confirmed the deletion
    /// - `Err(Error::ValidationError)` - Blank seller ID, no request made
    /// - `Err(Error::MarketplaceError)` - Marketplace request failed or reported failure
    pub async fn delete(&self, session: &Session, seller_id: &str) -> Result<(), Error> {
        let seller_id = seller_id.trim();
        if seller_id.is_empty() {
            return Err(ValidationError::MissingSellerId.into());
        }

        self.marketplace
            .delete_seller(session, seller_id)
            .await
            .map_err(|err| {
                tracing::warn!("Failed to delete seller {}: {}", seller_id, err);

                err
            })?;

        tracing::info!(
            seller_id = %seller_id,
            user_id = %session.user.id,
            "Seller deleted"
        );

        Ok(())
    }
}
