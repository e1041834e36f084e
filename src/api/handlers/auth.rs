//! Admin login, logout, and session probe.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{AuthResponse, LoginRequest, SessionResponse};
use crate::api::session::{expired_session_cookie, session_cookie, session_token};
use crate::app_state::AppState;
use crate::error::{AdminError, ErrorResponse};

/// `POST /api/auth/login`: exchange the shared credentials for a session cookie.
///
/// # Errors
///
/// Returns [`AdminError::InvalidCredentials`] on a wrong username or password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    summary = "Log in",
    description = "Validates the shared admin credentials and sets the `admin_session` cookie.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = AuthResponse),
        (status = 401, description = "Wrong username or password", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AdminError> {
    if !state.credentials.verify(&req.username, &req.password) {
        tracing::warn!(username = %req.username, "rejected admin login");
        return Err(AdminError::InvalidCredentials);
    }
    let token = state.sessions.create().await;
    tracing::info!(username = %req.username, "admin logged in");
    let cookie = session_cookie(token, state.sessions.ttl_secs());
    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(AuthResponse { success: true }),
    ))
}

/// `POST /api/auth/logout`: revoke the current session and clear the cookie.
///
/// Always succeeds, with or without a session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Log out",
    description = "Revokes the current session, if any, and expires the cookie.",
    responses(
        (status = 200, description = "Logged out", body = AuthResponse),
    )
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers)
        && state.sessions.revoke(token).await
    {
        tracing::info!("admin logged out");
    }
    (
        StatusCode::OK,
        [(SET_COOKIE, expired_session_cookie())],
        Json(AuthResponse { success: true }),
    )
}

/// `GET /api/auth/session`: report whether the caller holds a live session.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "Auth",
    summary = "Session status",
    description = "Returns whether the request carries a valid `admin_session` cookie.",
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
    )
)]
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let authenticated = match session_token(&headers) {
        Some(token) => state.sessions.is_valid(token).await,
        None => false,
    };
    Json(SessionResponse { authenticated })
}

/// Auth routes, reachable without a session.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}
