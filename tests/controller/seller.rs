//! Tests for the seller endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use pacific_admin::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        seller::Seller,
    },
    server::controller::{
        seller::{delete_seller, list_sellers},
        util::session::AuthSession,
    },
};

use super::*;

#[tokio::test]
/// Expect page 3 of 35 sellers to be requested as page=3&limit=10 and span 4 pages
async fn lists_requested_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sellers_endpoint(3, 10, factory::mock_sellers(20, 10), 35, 1)
        .build()
        .await?;

    let result = list_sellers(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::new(3, 10)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page: PageDto<Seller> = json_body(resp).await;
    assert_eq!(page.records.len(), 10);
    assert_eq!(page.records[0].id, "s21");
    assert_eq!(page.pagination.page, 3);
    assert_eq!(page.pagination.total, 35);
    assert_eq!(page.pagination.total_page, 4);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 without a marketplace request for a limit above the maximum
async fn fails_for_oversized_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sellers_endpoint(1, 500, Vec::new(), 0, 0)
        .build()
        .await?;

    let resp = list_sellers(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::new(1, 500)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 502 with the marketplace's message when it reports failure
async fn fails_when_marketplace_reports_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/admin/sellers")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"success":false,"message":"Admins only"}"#)
                .create()
        })
        .build()
        .await?;

    let resp = list_sellers(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Admins only");

    Ok(())
}

#[tokio::test]
/// Expect 401 when the marketplace rejects the session's access token
async fn fails_when_marketplace_rejects_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/admin/sellers")
                .match_query(mockito::Matcher::Any)
                .with_status(401)
                .create()
        })
        .build()
        .await?;

    let resp = list_sellers(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Query(PageQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 204 after the marketplace deletes the seller
async fn deletes_seller() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_delete_seller_endpoint("s1", 200, 1)
        .build()
        .await?;

    let result = delete_seller(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Path("s1".to_string()),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 when the seller does not exist
async fn fails_to_delete_missing_seller() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_delete_seller_endpoint("missing", 404, 1)
        .build()
        .await?;

    let resp = delete_seller(
        State(test.app_state()),
        AuthSession(signed_in_session(&test)),
        Path("missing".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a re-fetch after deleting to no longer list the deleted seller
async fn refetch_after_delete_excludes_seller() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_sellers_endpoint(1, 10, factory::mock_sellers(0, 3), 3, 1)
        .with_delete_seller_endpoint("s2", 200, 1)
        .build()
        .await?;
    let state = test.app_state();
    let session = signed_in_session(&test);

    let resp = list_sellers(
        State(state.clone()),
        AuthSession(session.clone()),
        Query(PageQuery::default()),
    )
    .await
    .into_response();
    let before: PageDto<Seller> = json_body(resp).await;
    assert!(before.records.iter().any(|s| s.id == "s2"));

    let resp = delete_seller(
        State(state.clone()),
        AuthSession(session.clone()),
        Path("s2".to_string()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The first listing mock has had its one hit, so this one answers the re-fetch
    let remaining = vec![
        factory::mock_seller("s1", "Seller 1"),
        factory::mock_seller("s3", "Seller 3"),
    ];
    test.mock(|server| {
        server
            .mock("GET", "/admin/sellers")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::mock_seller_page(remaining, 2, 1, 10).to_string())
            .expect(1)
            .create()
    });

    let resp = list_sellers(
        State(state),
        AuthSession(session),
        Query(PageQuery::default()),
    )
    .await
    .into_response();
    let after: PageDto<Seller> = json_body(resp).await;

    assert!(after.records.iter().all(|s| s.id != "s2"));
    assert_eq!(after.pagination.total, 2);
    test.assert_mocks();

    Ok(())
}
