use crate::{
    model::api::{PageQuery, MAX_PAGE_LIMIT},
    server::error::validation::ValidationError,
};

/// Checks a page request before it is forwarded to the marketplace.
///
/// # Returns
/// - `Ok(PageQuery)` - `page >= 1` and `1 <= limit <= MAX_PAGE_LIMIT`
/// - `Err(ValidationError::InvalidPage)` - Page is 0
/// - `Err(ValidationError::InvalidLimit)` - Limit is 0 or above the maximum
pub fn validate_page_query(query: PageQuery) -> Result<PageQuery, ValidationError> {
    if query.page == 0 {
        return Err(ValidationError::InvalidPage);
    }

    if query.limit == 0 || query.limit > MAX_PAGE_LIMIT {
        return Err(ValidationError::InvalidLimit(query.limit));
    }

    Ok(query)
}
