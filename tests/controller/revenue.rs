//! Tests for the admin revenue endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use pacific_admin::{
    model::{
        api::{PageDto, PageQuery},
        revenue::Revenue,
    },
    server::controller::{revenue::list_revenue, util::session::AuthSession},
};

use super::*;

#[tokio::test]
/// Expect server pagination to be used, with a missing totalPage computed
async fn lists_revenue_with_server_pagination() -> Result<(), TestError> {
    let rows = vec![factory::mock_revenue("Green Acres", "Tomatoes", 12.5)];
    let body = factory::mock_revenue_page(rows, Some(factory::mock_pagination(25, 1, 10, None)));
    let test = TestBuilder::new()
        .with_revenue_endpoint(1, 10, body, 1)
        .build()
        .await?;

    let result = list_revenue(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page: PageDto<Revenue> = json_body(resp).await;
    assert_eq!(page.records[0].farm.name, "Green Acres");
    assert_eq!(page.records[0].product.name, "Tomatoes");
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.total_page, 3);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect pagination derived from the rows when the marketplace sends none
async fn derives_pagination_without_server_pagination() -> Result<(), TestError> {
    let rows = vec![
        factory::mock_revenue("Green Acres", "Tomatoes", 12.5),
        factory::mock_revenue("Sunny Side", "Eggs", 3.25),
    ];
    let test = TestBuilder::new()
        .with_revenue_endpoint(1, 10, factory::mock_revenue_page(rows, None), 1)
        .build()
        .await?;

    let resp = list_revenue(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::default()),
    )
    .await
    .into_response();

    let page: PageDto<Revenue> = json_body(resp).await;
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.pagination.total_page, 1);

    Ok(())
}

#[tokio::test]
/// Expect 502 when the marketplace fails
async fn fails_when_marketplace_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/admin/admin-reveneu")
                .match_query(mockito::Matcher::Any)
                .with_status(500)
                .create()
        })
        .build()
        .await?;

    let resp = list_revenue(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}
