//! REST API layer: route handlers, DTOs, session guard, and router
//! composition.
//!
//! Application and statistics endpoints live under `/api` behind the
//! session guard; `/api/auth/*` and `/health` are open.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod session;

use axum::Router;
use axum::middleware::from_fn_with_state;

use crate::app_state::AppState;

/// Builds the complete router with all REST endpoints and the API docs.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(handlers::applications::routes())
        .merge(handlers::stats::routes())
        .route_layer(from_fn_with_state(state.clone(), session::require_session));

    let api = Router::new()
        .merge(protected)
        .merge(handlers::auth::routes());

    Router::new()
        .nest("/api", api)
        .merge(handlers::system::routes())
        .merge(docs_router())
        .with_state(state)
}

#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router<AppState> {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;
    use utoipa::OpenApi;

    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(openapi::ApiDoc::openapi()) }),
    )
}
