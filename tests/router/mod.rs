//! End-to-end tests driving the assembled router with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, StatusCode,
    },
    Router,
};
use pacific_admin::{
    model::{
        api::{ErrorDto, PageDto},
        seller::Seller,
        session::Session,
    },
    server::router::routes,
};
use pacific_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::util::TestContextExt;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.app_state())
}

async fn json_body<T: DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

fn login_request(email: &str, password: &str) -> Request<Body> {
    let body = serde_json::json!({ "email": email, "password": password });

    Request::post("/api/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
/// Signing in sets a cookie that authorizes later requests
async fn cookie_from_login_authorizes_sellers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_USER_ID, TEST_ROLE, Some(TEST_FARM))
        .with_sellers_endpoint(3, 10, factory::mock_sellers(20, 10), 35, 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(login_request(TEST_EMAIL, TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let resp = app
        .oneshot(
            Request::get("/api/sellers?page=3&limit=10")
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<Seller> = json_body(resp).await;
    assert_eq!(page.pagination.total_page, 4);
    assert_eq!(page.records[0].id, "s21");

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// A bearer token is accepted in place of the cookie
async fn bearer_token_reads_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/auth/session")
                .header(AUTHORIZATION, format!("Bearer {}", test.session_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let session: Session = json_body(resp).await;
    assert_eq!(session.user.id, TEST_USER_ID);
    assert_eq!(session.user.farm, TEST_FARM);

    Ok(())
}

#[tokio::test]
/// Protected routes reject requests without a session
async fn rejects_missing_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sellers_endpoint(1, 10, Vec::new(), 0, 0)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/sellers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Not authenticated");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tampered tokens are rejected
async fn rejects_tampered_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let token = format!("{}x", test.session_token());

    let resp = app(&test)
        .oneshot(
            Request::get("/api/auth/session")
                .header(COOKIE, format!("pacific_session={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// A zero page is rejected before reaching the marketplace
async fn rejects_zero_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/revenue?page=0&limit=10")
                .header(AUTHORIZATION, format!("Bearer {}", test.session_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Logout succeeds without a session
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(Request::post("/api/auth/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// The OpenAPI document lists every dashboard route
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    for path in [
        "/api/auth/login",
        "/api/auth/session",
        "/api/auth/logout",
        "/api/sellers",
        "/api/sellers/{id}",
        "/api/revenue",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
