//! Aggregate statistics handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::StatsResponse;
use crate::app_state::AppState;
use crate::error::{AdminError, ErrorResponse};

/// `GET /api/stats`: dashboard statistics over every application.
///
/// # Errors
///
/// Returns [`AdminError::PersistenceError`] if the records cannot be read.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Statistics",
    summary = "Application statistics",
    description = "Distributions, word frequencies, submission timeline, link and theme counts, and teammate totals over the full record set.",
    responses(
        (status = 200, description = "Statistics report", body = StatsResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 500, description = "Record store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AdminError> {
    let stats = state.application_service.statistics().await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

/// Statistics routes; mounted behind the session guard.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}
