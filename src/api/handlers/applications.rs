//! Application review handlers: list, detail, status change, import.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    ApplicationListResponse, ApplicationResponse, ImportResponse, ListApplicationsParams,
    UpdateStatusRequest,
};
use crate::app_state::AppState;
use crate::domain::ApplicationId;
use crate::error::{AdminError, ErrorResponse};

/// `GET /api/applications`: list applications with optional search and
/// status filters.
///
/// # Errors
///
/// Returns [`AdminError::InvalidStatus`] for an unknown status in `filters`.
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "Applications",
    summary = "List applications",
    description = "Returns applications ordered by most recent update. `search` matches name, CWID, or user ID case-insensitively; `filters` is a comma-separated status list.",
    params(ListApplicationsParams),
    responses(
        (status = 200, description = "Matching applications", body = ApplicationListResponse),
        (status = 400, description = "Unknown status in filters", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
    )
)]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ListApplicationsParams>,
) -> Result<impl IntoResponse, AdminError> {
    let filter = params.to_filter()?;
    let applications = state.application_service.list_applications(&filter).await?;
    Ok(Json(ApplicationListResponse {
        success: true,
        total: applications.len(),
        applications,
    }))
}

/// `GET /api/applications/{id}`: full application detail.
///
/// # Errors
///
/// Returns [`AdminError::InvalidApplicationId`] for a non-numeric ID or
/// [`AdminError::ApplicationNotFound`] for an unknown one.
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = "Applications",
    summary = "Get application",
    description = "Returns every submitted answer for one application.",
    params(
        ("id" = i64, Path, description = "Application ID"),
    ),
    responses(
        (status = 200, description = "Application detail", body = ApplicationResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse),
    )
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id: ApplicationId = id.parse()?;
    let application = state.application_service.get_application(id).await?;
    Ok(Json(ApplicationResponse {
        success: true,
        application,
    }))
}

/// `PATCH /api/applications/{id}`: change an application's status.
///
/// # Errors
///
/// Returns [`AdminError::InvalidRequest`] when `status` is missing,
/// [`AdminError::InvalidStatus`] when it is not recognized, or
/// [`AdminError::ApplicationNotFound`] for an unknown ID.
#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    tag = "Applications",
    summary = "Update application status",
    description = "Sets the review status. Invalid values leave the record untouched.",
    params(
        ("id" = i64, Path, description = "Application ID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated application", body = ApplicationResponse),
        (status = 400, description = "Missing or invalid status", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse),
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AdminError> {
    let id: ApplicationId = id.parse()?;
    let Some(status) = req.status else {
        return Err(AdminError::InvalidRequest("status is required".to_string()));
    };
    let application = state
        .application_service
        .update_status(id, &status)
        .await?;
    Ok(Json(ApplicationResponse {
        success: true,
        application,
    }))
}

/// `POST /api/applications/import`: bulk-insert a CSV export.
///
/// # Errors
///
/// Returns [`AdminError::Import`] if any row is malformed; nothing is
/// stored in that case.
#[utoipa::path(
    post,
    path = "/api/applications/import",
    tag = "Applications",
    summary = "Import applications from CSV",
    description = "Accepts a CSV body whose headers are the camelCase record field names. All rows are inserted or none are.",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 201, description = "Applications imported", body = ImportResponse),
        (status = 400, description = "Malformed CSV", body = ErrorResponse),
    )
)]
pub async fn import_applications(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AdminError> {
    if body.is_empty() {
        return Err(AdminError::InvalidRequest("empty CSV body".to_string()));
    }
    let inserted = state.application_service.import_csv(&body).await?;
    let ids: Vec<i64> = inserted.iter().map(|r| r.id.get()).collect();
    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            success: true,
            imported: ids.len(),
            ids,
        }),
    ))
}

/// Application routes; mounted behind the session guard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/applications", get(list_applications))
        .route("/applications/import", post(import_applications))
        .route(
            "/applications/{id}",
            get(get_application).patch(update_status),
        )
}
