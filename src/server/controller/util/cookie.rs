use cookie::{time::Duration, Cookie, SameSite};

use crate::server::model::session::{SessionConfig, SESSION_COOKIE_NAME};

/// Cookie storing a freshly signed session token.
///
/// HttpOnly and SameSite=Lax; `Secure` follows the session config and Max-Age
/// matches the session lifetime.
pub fn session_cookie(config: &SessionConfig, token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .max_age(Duration::seconds(config.max_age.num_seconds()))
        .build()
}

/// Cookie instructing the browser to drop the session cookie.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .max_age(Duration::ZERO)
        .build()
}
