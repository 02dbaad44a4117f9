use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
        session::Session,
    },
    server::{
        controller::util::{
            cookie::{removal_cookie, session_cookie},
            session::AuthSession,
        },
        error::Error,
        model::{app::AppState, auth::Credentials},
        service::auth::{login::LoginService, session::SessionService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with marketplace credentials
///
/// Validates the credential pair, authorizes it with the marketplace and issues a
/// signed session. The session token is returned in the body and set as the
/// `pacific_session` cookie.
///
/// # Responses
/// - 200 (OK): Signed in, body contains the token and session
/// - 400 (Bad Request): Email or password missing
/// - 401 (Unauthorized): Marketplace rejected the credentials
/// - 502 (Bad Gateway): Marketplace unreachable or returned an unexpected response
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 502, description = "Marketplace request failed", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials = Credentials::try_from(payload)?;

    let identity = LoginService::new(&state.marketplace)
        .authorize(credentials)
        .await?;
    let (token, claims) = SessionService::new(&state.session).issue(identity)?;

    let cookie = session_cookie(&state.session, &token);
    let body = LoginResponseDto {
        token,
        session: claims.project(),
    };

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie.to_string())],
        Json(body),
    ))
}

/// Get the current session
///
/// # Responses
/// - 200 (OK): Session projected from the signed token
/// - 401 (Unauthorized): Token missing, invalid or expired
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session", body = Session),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_session(AuthSession(session): AuthSession) -> Json<Session> {
    Json(session)
}

/// Sign out by clearing the session cookie
///
/// Always succeeds, with or without a session. The signed token itself stays
/// valid until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cookie cleared")
    ),
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, removal_cookie(&state.session).to_string())],
    )
}
