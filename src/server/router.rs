//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every dashboard endpoint is registered here with its utoipa path metadata;
//! the collected OpenAPI document is served with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the dashboard API router with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Sign in with marketplace credentials
/// - `GET /api/auth/session` - Current session
/// - `POST /api/auth/logout` - Clear the session cookie
/// - `GET /api/sellers` - Page of sellers
/// - `DELETE /api/sellers/{id}` - Delete a seller
/// - `GET /api/revenue` - Page of admin revenue records
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let state = AppState::new(marketplace, session_config);
/// let router = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pacific Admin", description = "Pacific marketplace admin dashboard API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Sign-in and session routes"),
        (name = controller::seller::SELLER_TAG, description = "Seller management routes"),
        (name = controller::revenue::REVENUE_TAG, description = "Admin revenue routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::seller::list_sellers))
        .routes(routes!(controller::seller::delete_seller))
        .routes(routes!(controller::revenue::list_revenue))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
