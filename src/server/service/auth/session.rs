use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use jsonwebtoken::errors::ErrorKind;

use crate::{
    model::session::Session,
    server::{
        error::{auth::AuthError, Error},
        model::{
            auth::IdentityToken,
            session::{SessionClaims, SessionConfig},
        },
    },
};

/// Service issuing and reading signed session tokens.
///
/// Sessions are stateless: nothing is stored server-side, and a token stays valid
/// until its `exp` claim regardless of logout.
pub struct SessionService<'a> {
    config: &'a SessionConfig,
}

impl<'a> SessionService<'a> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Signs a new session for `identity`, issued now.
    ///
    /// # Returns
    /// - `Ok((String, SessionClaims))` - Signed token and the claims it carries
    /// - `Err(Error::SessionSigningError)` - Token could not be encoded
    pub fn issue(&self, identity: IdentityToken) -> Result<(String, SessionClaims), Error> {
        self.issue_at(identity, Utc::now())
    }

    /// Signs a new session for `identity` as if issued at `issued_at`.
    pub fn issue_at(
        &self,
        identity: IdentityToken,
        issued_at: DateTime<Utc>,
    ) -> Result<(String, SessionClaims), Error> {
        let claims = SessionClaims::enrich(identity, issued_at, self.config.max_age);
        let token = jsonwebtoken::encode(
            &self.config.header(),
            &claims,
            self.config.encoding_key(),
        )?;

        Ok((token, claims))
    }

    /// Verifies a session token and projects it into a [`Session`].
    ///
    /// # Returns
    /// - `Ok(Session)` - Token signature valid and not yet expired
    /// - `Err(Error::AuthError(AuthError::SessionExpired))` - Token past its `exp`
    /// - `Err(Error::AuthError(AuthError::SessionInvalid))` - Token malformed, tampered
    ///   with, or signed with another secret
    pub fn read(&self, token: &str) -> Result<Session, Error> {
        let data = jsonwebtoken::decode::<SessionClaims>(
            token,
            self.config.decoding_key(),
            &self.config.validation(),
        )
        .map_err(|err| {
            tracing::debug!("Rejected session token: {}", err);

            match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::SessionInvalid,
            }
        })?;

        Ok(data.claims.project())
    }
}
