use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shown in place of address parts the marketplace did not return.
pub const MISSING_ADDRESS_PART: &str = "N/A";

/// Avatar shown for sellers without an uploaded image.
pub const PLACEHOLDER_AVATAR_URL: &str = "/placeholder.svg?height=32&width=32";

/// A seller account as returned by the marketplace admin API.
///
/// Only `_id` and `name` are guaranteed; everything else falls back to a
/// default so a partially populated record still renders.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub verification_info: VerificationInfo,
    #[serde(default)]
    pub credit: Option<f64>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub fine: f64,
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub farm: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Avatar {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct VerificationInfo {
    #[serde(default)]
    pub verified: bool,
    /// Email verification token; read from the marketplace but never re-exposed.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Seller {
    pub fn is_verified(&self) -> bool {
        self.verification_info.verified
    }

    pub fn verification_label(&self) -> &'static str {
        if self.is_verified() {
            "Verified"
        } else {
            "Unverified"
        }
    }

    /// City and state, substituting `N/A` for missing parts.
    pub fn location<'a>(&'a self) -> (&'a str, &'a str) {
        let address = self.address.as_ref();
        let part = |value: Option<&'a String>| -> &'a str {
            value
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .unwrap_or(MISSING_ADDRESS_PART)
        };

        (
            part(address.and_then(|a| a.city.as_ref())),
            part(address.and_then(|a| a.state.as_ref())),
        )
    }

    pub fn avatar_url(&self) -> &str {
        self.avatar
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_AVATAR_URL)
    }
}
