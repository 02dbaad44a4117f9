use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use pacific_admin::{
    model::{api::ErrorDto, auth::LoginDto},
    server::controller::auth::login,
};

use super::*;

#[tokio::test]
/// Expect 200 with a signed session whose role and farm match the marketplace payload
async fn signs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_USER_ID, TEST_ROLE, Some(TEST_FARM))
        .build()
        .await?;

    let result = login(
        State(test.app_state()),
        Json(LoginDto::new(TEST_EMAIL, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("pacific_session="));
    assert!(cookie.contains("HttpOnly"));

    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["session"]["user"]["id"], TEST_USER_ID);
    assert_eq!(body["session"]["user"]["role"], TEST_ROLE);
    assert_eq!(body["session"]["user"]["farm"], TEST_FARM);
    assert_eq!(body["session"]["accessToken"], TEST_ACCESS_TOKEN);
    assert!(cookie.contains(body["token"].as_str().unwrap()));

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the farm to default to an empty string when the marketplace omits it
async fn defaults_missing_farm() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_USER_ID, TEST_ROLE, None)
        .build()
        .await?;

    let resp = login(
        State(test.app_state()),
        Json(LoginDto::new(TEST_EMAIL, TEST_PASSWORD)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["session"]["user"]["farm"], "");

    Ok(())
}

#[tokio::test]
/// Expect 400 before any marketplace request when the password is empty
async fn fails_for_empty_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unreachable_login_endpoint()
        .build()
        .await?;

    let result = login(State(test.app_state()), Json(LoginDto::new(TEST_EMAIL, ""))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 before any marketplace request when the email is missing
async fn fails_for_missing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unreachable_login_endpoint()
        .build()
        .await?;
    let payload = LoginDto {
        email: None,
        password: Some(TEST_PASSWORD.to_string()),
    };

    let resp = login(State(test.app_state()), Json(payload))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 carrying the marketplace's message for rejected credentials
async fn fails_for_rejected_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_failure_endpoint(401, Some("Incorrect password"))
        .build()
        .await?;

    let resp = login(
        State(test.app_state()),
        Json(LoginDto::new(TEST_EMAIL, "wrong")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(SET_COOKIE).is_none());
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Incorrect password");

    Ok(())
}

#[tokio::test]
/// Expect 401 with the default message when the marketplace gives no reason
async fn fails_with_default_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_failure_endpoint(200, None)
        .build()
        .await?;

    let resp = login(
        State(test.app_state()),
        Json(LoginDto::new(TEST_EMAIL, "wrong")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid credentials");

    Ok(())
}
