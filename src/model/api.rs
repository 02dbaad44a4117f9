use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page size used by the dashboard list views when none is requested.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Largest page size the dashboard API will forward to the marketplace.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Page selection for list endpoints, 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of records per page
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(default_page(), default_limit())
    }
}

/// Pagination metadata attached to every page of records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of records across all pages
    pub total: u64,
    /// Current page, starting at 1
    pub page: u32,
    /// Page size the server applied
    pub limit: u32,
    /// Number of pages available
    pub total_page: u32,
}

impl Pagination {
    /// Builds pagination metadata, deriving `total_page` from `total` and `limit`.
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        Self {
            total,
            page,
            limit,
            total_page: total_pages(total, limit),
        }
    }

    /// Placeholder shown by a list view before its first successful fetch.
    pub fn empty(limit: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            limit,
            total_page: 1,
        }
    }
}

/// Number of pages needed to show `total` records `limit` at a time.
///
/// A zero `limit` is treated as 1 so the division is always defined.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if total == 0 {
        return 0;
    }

    let pages = total.div_ceil(u64::from(limit.max(1)));

    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// A single page of records along with its pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Records on this page
    pub records: Vec<T>,
    /// Pagination metadata for the listing
    pub pagination: Pagination,
}

impl<T> PageDto<T> {
    pub fn new(records: Vec<T>, pagination: Pagination) -> Self {
        Self {
            records,
            pagination,
        }
    }
}
