//! Session cookie carrying verified claims between requests.
//!
//! The cookie value is the claim set as JSON. The jar percent-encodes it on
//! write and decodes it on read. It is not trusted on read: callers must
//! re-verify the restored claims.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tgauth_types::{ClaimSet, FRESHNESS_WINDOW};

use crate::app_error::{AppError, AppResult};

pub const SESSION_COOKIE: &str = "tg_auth";

pub fn session_cookie(claims: &ClaimSet, secure: bool) -> AppResult<Cookie<'static>> {
    let json = serde_json::to_string(claims)
        .map_err(|e| AppError::Internal(format!("Failed to serialize claims: {e}")))?;
    Ok(Cookie::build((SESSION_COOKIE, json))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(FRESHNESS_WINDOW)
        .build())
}

/// Restores claims from the session cookie. `None` when absent or undecodable.
pub fn read_session(jar: &CookieJar) -> Option<ClaimSet> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match serde_json::from_str(cookie.value()) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "undecodable session cookie");
            None
        }
    }
}

pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
