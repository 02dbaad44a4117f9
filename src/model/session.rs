use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client-visible projection of a signed session token.
///
/// Every authenticated marketplace call takes a `&Session`; the access token it
/// carries is the only authorization state the dashboard holds.
#[derive(Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The signed-in user
    pub user: SessionUser,
    /// Bearer token for marketplace API calls
    pub access_token: String,
    /// Refresh token issued alongside the access token
    pub refresh_token: String,
    /// When the session stops being accepted
    pub expires: DateTime<Utc>,
}

/// User portion of a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Marketplace user ID
    pub id: String,
    /// Email address, when the marketplace returned one
    pub email: Option<String>,
    /// Display name, when the marketplace returned one
    pub name: Option<String>,
    /// Marketplace role, e.g. `admin`
    pub role: String,
    /// Farm the user is associated with, empty when none
    pub farm: String,
}

impl Session {
    /// Bearer credential for `Authorization` headers.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires", &self.expires)
            .finish()
    }
}
