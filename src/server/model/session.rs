//! Signed session token claims.
//!
//! The session is stateless: everything the dashboard knows about a signed-in
//! user lives in an HS256 token signed with the configured secret. Building the
//! claims and projecting them back into a [`Session`] are pure functions so the
//! whole pipeline `IdentityToken -> SessionClaims -> Session` can be tested
//! without I/O.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::session::{Session, SessionUser},
    server::model::auth::IdentityToken,
};

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE_NAME: &str = "pacific_session";

/// Signing keys and lifetime for session tokens.
pub struct SessionConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// How long a session stays valid after login
    pub max_age: Duration,
    /// Whether the session cookie is marked `Secure`
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn new(secret: &str, max_age: Duration, secure_cookie: bool) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            max_age,
            secure_cookie,
        }
    }

    pub fn header(&self) -> Header {
        Header::new(Algorithm::HS256)
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// HS256 only, `exp` and `sub` required, no expiry leeway.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        validation
    }
}

/// Claims carried by the signed session token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Marketplace user ID
    pub sub: String,
    pub role: String,
    /// Farm association, empty string when the user has none
    #[serde(default)]
    pub farm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
    /// Issued at, seconds since the epoch
    pub iat: i64,
    /// Expires at, seconds since the epoch
    pub exp: i64,
}

impl SessionClaims {
    /// Builds the claims for a freshly authenticated identity.
    ///
    /// The session expires `max_age` after `issued_at`, saturating at the latest
    /// representable instant; only a new login produces a later expiry.
    pub fn enrich(identity: IdentityToken, issued_at: DateTime<Utc>, max_age: Duration) -> Self {
        Self {
            sub: identity.id,
            role: identity.role,
            farm: identity.farm.unwrap_or_default(),
            email: identity.email,
            name: identity.name,
            access_token: identity.access_token,
            refresh_token: identity.refresh_token,
            iat: issued_at.timestamp(),
            exp: issued_at
                .checked_add_signed(max_age)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
                .timestamp(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Projects the claims into the client-visible session.
    pub fn project(&self) -> Session {
        Session {
            user: SessionUser {
                id: self.sub.clone(),
                email: self.email.clone(),
                name: self.name.clone(),
                role: self.role.clone(),
                farm: self.farm.clone(),
            },
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires: self.expires_at(),
        }
    }
}

impl fmt::Debug for SessionClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClaims")
            .field("sub", &self.sub)
            .field("role", &self.role)
            .field("farm", &self.farm)
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish_non_exhaustive()
    }
}
