use pacific_admin::server::controller::{auth::get_session, util::session::AuthSession};

use super::*;

#[tokio::test]
/// Expect the projected session to carry the identity and both tokens
async fn returns_projected_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let session = signed_in_session(&test);

    let axum::Json(body) = get_session(AuthSession(session)).await;

    assert_eq!(body.user.id, TEST_USER_ID);
    assert_eq!(body.user.role, TEST_ROLE);
    assert_eq!(body.user.farm, TEST_FARM);
    assert_eq!(body.access_token, TEST_ACCESS_TOKEN);
    assert_eq!(body.refresh_token, TEST_REFRESH_TOKEN);

    Ok(())
}

#[tokio::test]
/// Expect the session to expire 24 hours after it was issued
async fn session_expires_after_a_day() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let session = signed_in_session(&test);
    let remaining = session.expires - chrono::Utc::now();

    assert!(remaining <= chrono::Duration::hours(24));
    assert!(remaining > chrono::Duration::hours(23));

    Ok(())
}
