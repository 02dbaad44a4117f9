use crate::model::{
    api::{PageDto, PageQuery},
    seller::Seller,
    session::Session,
};

use super::{
    model::{Envelope, SellerPage},
    status_error, Error, MarketplaceClient,
};

const SELLERS_PATH: &str = "/admin/sellers";

impl MarketplaceClient {
    /// Fetches one page of sellers from `GET /admin/sellers`.
    ///
    /// Pagination fields missing from the response fall back to the requested
    /// page and limit; `totalPage` is always derived from `total / limit`.
    pub async fn list_sellers(
        &self,
        session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Seller>, Error> {
        let response = self
            .http
            .get(self.url(SELLERS_PATH))
            .bearer_auth(session.access_token())
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;

        let envelope: Envelope<SellerPage> = Self::read_envelope(response, SELLERS_PATH).await?;
        let page = envelope.data.unwrap_or_default();
        let pagination = page.pagination(query);

        Ok(PageDto::new(page.sellers, pagination))
    }

    /// Deletes a seller with `DELETE /admin/sellers/{id}`.
    ///
    /// A 2xx response counts as success unless its body is an envelope that
    /// explicitly reports `success: false`; an empty body is accepted.
    pub async fn delete_seller(&self, session: &Session, seller_id: &str) -> Result<(), Error> {
        let path = format!("{}/{}", SELLERS_PATH, urlencoding::encode(seller_id));

        let response = self
            .http
            .delete(self.url(&path))
            .bearer_auth(session.access_token())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &body, &path));
        }

        match serde_json::from_slice::<Envelope<serde::de::IgnoredAny>>(&body) {
            Ok(envelope) if !envelope.success => Err(Error::Application(
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to delete seller".to_string()),
            )),
            _ => Ok(()),
        }
    }
}
