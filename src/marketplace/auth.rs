use super::{
    model::{Envelope, LoginData, LoginRequest},
    status_error, Error, MarketplaceClient,
};

const LOGIN_PATH: &str = "/auth/login";

impl MarketplaceClient {
    /// Submits a credential pair to `POST /auth/login`.
    ///
    /// Unlike the authenticated endpoints, a rejected login is not an error at this
    /// layer: the envelope is returned as-is whenever it decodes, whatever the status,
    /// so the caller can surface the marketplace's own message.
    ///
    /// # Arguments
    /// - `email` - Account email address
    /// - `password` - Account password, sent once and not retained
    ///
    /// # Returns
    /// - `Ok(Envelope<LoginData>)` - Decoded login envelope, successful or not
    /// - `Err(Error::Network)` - The request could not be sent
    /// - `Err(Error)` - Non-2xx response without a decodable envelope, or an
    ///   undecodable 2xx body
    pub async fn login(&self, email: &str, password: &str) -> Result<Envelope<LoginData>, Error> {
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<Envelope<LoginData>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(status_error(status, &body, LOGIN_PATH)),
            Err(err) => Err(err.into()),
        }
    }
}
