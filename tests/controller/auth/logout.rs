use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
};
use pacific_admin::server::controller::auth::logout;

use super::*;

#[tokio::test]
/// Expect 204 with a cookie that clears the session
async fn clears_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(State(test.app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cookie = resp
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("pacific_session=;"));
    assert!(cookie.contains("Max-Age=0"));

    Ok(())
}
