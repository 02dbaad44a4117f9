//! Wire shapes of the marketplace REST API.
//!
//! Every endpoint wraps its payload in the same `{success, message?, data?}`
//! envelope; revenue listings optionally add a top-level `pagination` object.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::{total_pages, PageQuery, Pagination},
    seller::Seller,
};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<RawPagination>,
}

/// Request body of `POST /auth/login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` of a successful login.
///
/// Tokens are documented under `data.data` but some deployments return them
/// next to `_id`; both locations are accepted with the nested one preferred.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(rename = "_id")]
    pub id: String,
    pub data: LoginAccount,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccount {
    pub role: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub farm: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl LoginData {
    pub fn access_token(&self) -> Option<&str> {
        self.data
            .access_token
            .as_deref()
            .or(self.access_token.as_deref())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.data
            .refresh_token
            .as_deref()
            .or(self.refresh_token.as_deref())
    }
}

/// `data` of `GET /admin/sellers`.
#[derive(Debug, Default, Deserialize)]
pub struct SellerPage {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SellerPage {
    /// Resolves pagination, falling back to the requested page and limit for
    /// fields the marketplace left out or zeroed.
    pub fn pagination(&self, query: PageQuery) -> Pagination {
        Pagination::new(
            self.total.unwrap_or(0),
            self.page.filter(|p| *p > 0).unwrap_or(query.page),
            self.limit.filter(|l| *l > 0).unwrap_or(query.limit),
        )
    }
}

/// Server-supplied pagination; `totalPage` is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total_page: Option<u32>,
}

impl RawPagination {
    pub fn resolve(&self, query: PageQuery) -> Pagination {
        let page = self.page.filter(|p| *p > 0).unwrap_or(query.page);
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(query.limit);

        Pagination {
            total: self.total,
            page,
            limit,
            total_page: self
                .total_page
                .unwrap_or_else(|| total_pages(self.total, limit)),
        }
    }
}
