use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::session::Session;

/// Login form submitted to the dashboard.
///
/// Both fields are optional at the wire level so a missing field surfaces as a
/// validation error rather than a body deserialization rejection.
#[derive(Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginDto {
    /// Account email address
    #[serde(default)]
    pub email: Option<String>,
    /// Account password
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginDto {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDto")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Response body of a successful login.
#[derive(Clone, Deserialize, Serialize, ToSchema)]
pub struct LoginResponseDto {
    /// Signed session token, also set as the session cookie
    pub token: String,
    /// Session projected from the signed token
    pub session: Session,
}
