use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin commission earned on one farm's product.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub farm: NamedRef,
    pub product: NamedRef,
    #[serde(default)]
    pub admin_revenue: f64,
}

/// Reference to another marketplace record by ID and display name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Revenue {
    /// Admin revenue as a dollar amount with two decimals, e.g. `$12.50`.
    pub fn formatted_admin_revenue(&self) -> String {
        format!("${:.2}", self.admin_revenue)
    }
}
