//! Cookie-backed admin session guard.
//!
//! The `admin_session` cookie holds a [`SessionToken`]; [`require_session`]
//! rejects any request whose token is missing, malformed, or expired.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::SessionToken;
use crate::error::AdminError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Extracts the session token from the request's `Cookie` headers.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

/// `Set-Cookie` value issuing `token` for `max_age_secs`.
#[must_use]
pub fn session_cookie(token: SessionToken, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Strict; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value that expires the session cookie.
#[must_use]
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Path=/; SameSite=Strict; Max-Age=0")
}

/// Middleware rejecting requests without a live admin session.
///
/// # Errors
///
/// Returns [`AdminError::Unauthorized`] when no valid session cookie is present.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AdminError> {
    let Some(token) = session_token(request.headers()) else {
        return Err(AdminError::Unauthorized);
    };
    if !state.sessions.is_valid(token).await {
        return Err(AdminError::Unauthorized);
    }
    Ok(next.run(request).await)
}
