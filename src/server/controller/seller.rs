use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        seller::Seller,
    },
    server::{
        controller::util::session::AuthSession, error::Error, model::app::AppState,
        service::seller::SellerService,
    },
};

pub static SELLER_TAG: &str = "seller";

/// List sellers one page at a time
///
/// # Responses
/// - 200 (OK): Page of sellers with pagination metadata
/// - 400 (Bad Request): Page or limit out of range
/// - 401 (Unauthorized): No valid session, or the marketplace rejected its token
/// - 502 (Bad Gateway): Marketplace request failed
#[utoipa::path(
    get,
    path = "/api/sellers",
    tag = SELLER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of sellers", body = PageDto<Seller>),
        (status = 400, description = "Invalid page or limit", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Marketplace request failed", body = ErrorDto)
    ),
)]
pub async fn list_sellers(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = SellerService::new(&state.marketplace)
        .list(&session, query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Delete a seller
///
/// # Responses
/// - 204 (No Content): Marketplace deleted the seller
/// - 401 (Unauthorized): No valid session, or the marketplace rejected its token
/// - 404 (Not Found): Seller does not exist
/// - 502 (Bad Gateway): Marketplace request failed or reported failure
#[utoipa::path(
    delete,
    path = "/api/sellers/{id}",
    tag = SELLER_TAG,
    params(
        ("id" = String, Path, description = "Marketplace ID of the seller")
    ),
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 502, description = "Marketplace request failed", body = ErrorDto)
    ),
)]
pub async fn delete_seller(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    SellerService::new(&state.marketplace)
        .delete(&session, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
