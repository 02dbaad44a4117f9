use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        revenue::Revenue,
    },
    server::{
        controller::util::session::AuthSession, error::Error, model::app::AppState,
        service::revenue::RevenueService,
    },
};

pub static REVENUE_TAG: &str = "revenue";

/// List admin revenue per farm and product
///
/// # Responses
/// - 200 (OK): Page of revenue records with pagination metadata
/// - 400 (Bad Request): Page or limit out of range
/// - 401 (Unauthorized): No valid session, or the marketplace rejected its token
/// - 502 (Bad Gateway): Marketplace request failed
#[utoipa::path(
    get,
    path = "/api/revenue",
    tag = REVENUE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of revenue records", body = PageDto<Revenue>),
        (status = 400, description = "Invalid page or limit", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Marketplace request failed", body = ErrorDto)
    ),
)]
pub async fn list_revenue(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = RevenueService::new(&state.marketplace)
        .list(&session, query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
