use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};
use cookie::Cookie;

use crate::{
    model::session::Session,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::SESSION_COOKIE_NAME},
        service::auth::session::SessionService,
    },
};

/// Verified session of the requesting user.
///
/// Extracting it rejects the request with 401 when no token is present or the
/// token is invalid or expired.
pub struct AuthSession(pub Session);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Err(AuthError::SessionMissing.into());
        };

        let session = SessionService::new(&state.session).read(&token)?;

        Ok(Self(session))
    }
}

/// Finds the session token in an `Authorization: Bearer` header or the session cookie.
///
/// The header wins when both are present. The `Bearer` scheme is matched
/// case-insensitively.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
