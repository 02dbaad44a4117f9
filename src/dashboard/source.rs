//! Data sources the dashboard views read from and mutate through.

use async_trait::async_trait;

use crate::{
    marketplace::{Error, MarketplaceClient},
    model::{
        api::{PageDto, PageQuery},
        revenue::Revenue,
        seller::Seller,
        session::Session,
    },
};

/// Fetches one page of `T` on behalf of a session.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, session: &Session, query: PageQuery) -> Result<PageDto<T>, Error>;
}

/// Deletes a seller on behalf of a session.
#[async_trait]
pub trait SellerRemover: Send + Sync {
    async fn remove(&self, session: &Session, seller_id: &str) -> Result<(), Error>;
}

#[async_trait]
impl PageSource<Seller> for MarketplaceClient {
    async fn fetch_page(
        &self,
        session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Seller>, Error> {
        self.list_sellers(session, query).await
    }
}

#[async_trait]
impl PageSource<Revenue> for MarketplaceClient {
    async fn fetch_page(
        &self,
        session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Revenue>, Error> {
        self.list_revenue(session, query).await
    }
}

#[async_trait]
impl SellerRemover for MarketplaceClient {
    async fn remove(&self, session: &Session, seller_id: &str) -> Result<(), Error> {
        self.delete_seller(session, seller_id).await
    }
}
