use std::fmt;

use crate::{
    marketplace::model::LoginData,
    model::auth::LoginDto,
    server::error::validation::ValidationError,
};

/// A validated email/password pair.
///
/// Only exists for the duration of a single login call; it is consumed by
/// [`LoginService::authorize`](crate::server::service::auth::login::LoginService::authorize)
/// and never stored.
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<LoginDto> for Credentials {
    type Error = ValidationError;

    /// Both fields must be present and non-blank.
    fn try_from(dto: LoginDto) -> Result<Self, Self::Error> {
        let email = dto
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        let password = dto.password.filter(|password| !password.trim().is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(ValidationError::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity returned by the marketplace for an authenticated user.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken {
    pub id: String,
    pub role: String,
    pub farm: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
}

impl IdentityToken {
    /// Maps a successful login payload to an identity.
    ///
    /// Returns `None` when the payload lacks either bearer token.
    pub fn from_login(data: LoginData) -> Option<Self> {
        let access_token = data.access_token()?.to_string();
        let refresh_token = data.refresh_token()?.to_string();
        let user = data.data.user.unwrap_or_default();

        Some(Self {
            id: data.id,
            role: data.data.role,
            farm: user.farm,
            email: user.email,
            name: user.name,
            access_token,
            refresh_token,
        })
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityToken")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("farm", &self.farm)
            .finish_non_exhaustive()
    }
}
