use dioxus_logger::tracing;

use crate::{
    marketplace::{Error as MarketplaceError, MarketplaceClient},
    server::{
        error::{auth::AuthError, Error},
        model::auth::{Credentials, IdentityToken},
    },
};

/// Service authorizing credentials against the marketplace login endpoint.
pub struct LoginService<'a> {
    marketplace: &'a MarketplaceClient,
}

impl<'a> LoginService<'a> {
    /// Creates a new instance of LoginService.
    ///
    /// # Arguments
    /// - `marketplace` - Client for the marketplace API
    pub fn new(marketplace: &'a MarketplaceClient) -> Self {
        Self { marketplace }
    }

    /// Exchanges a credential pair for the marketplace identity it belongs to.
    ///
    /// The credentials are consumed; a single login request is made with no retry.
    ///
    /// # Arguments
    /// - `credentials` - Validated email and password
    ///
    /// # Returns
    /// - `Ok(IdentityToken)` - Marketplace accepted the credentials
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Marketplace rejected the
    ///   credentials, carrying its message or `"Invalid credentials"`
    /// - `Err(Error::MarketplaceError)` - Marketplace unreachable, answered with an unexpected
    ///   status, or accepted the login without issuing tokens
    pub async fn authorize(&self, credentials: Credentials) -> Result<IdentityToken, Error> {
        let result = self
            .marketplace
            .login(credentials.email(), credentials.password())
            .await;
        drop(credentials);

        let envelope = match result {
            Ok(envelope) => envelope,
            Err(MarketplaceError::Unauthorized) => {
                return Err(AuthError::invalid_credentials(None).into())
            }
            Err(MarketplaceError::Status { status, message }) if (400..500).contains(&status) => {
                return Err(AuthError::invalid_credentials(message).into())
            }
            Err(err) => {
                tracing::warn!("Login request to marketplace failed: {}", err);

                return Err(err.into());
            }
        };

        let data = match envelope.data {
            Some(data) if envelope.success => data,
            _ => {
                tracing::debug!("Marketplace rejected login");

                return Err(AuthError::invalid_credentials(envelope.message).into());
            }
        };

        let Some(identity) = IdentityToken::from_login(data) else {
            tracing::warn!("Marketplace accepted a login without issuing tokens");

            return Err(MarketplaceError::Application(
                "Marketplace accepted the login without issuing tokens".to_string(),
            )
            .into());
        };

        tracing::info!(
            user_id = %identity.id,
            role = %identity.role,
            "User signed in"
        );

        Ok(identity)
    }
}
