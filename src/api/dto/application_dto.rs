//! Application list, detail, status-update, and import DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ApplicationFilter, ApplicationRecord};
use crate::error::AdminError;

/// Query parameters for `GET /api/applications`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListApplicationsParams {
    /// Case-insensitive substring matched against full name, CWID, and user ID.
    #[serde(default)]
    pub search: Option<String>,
    /// Comma-separated statuses to include (e.g. `accepted,waitlisted`).
    #[serde(default)]
    pub filters: Option<String>,
}

impl ListApplicationsParams {
    /// Converts the raw query into a typed [`ApplicationFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStatus`] if `filters` names an unknown status.
    pub fn to_filter(&self) -> Result<ApplicationFilter, AdminError> {
        let statuses = match self.filters.as_deref() {
            Some(raw) => ApplicationFilter::parse_statuses(raw)?,
            None => Vec::new(),
        };
        Ok(ApplicationFilter::new()
            .with_search(self.search.as_deref().unwrap_or_default())
            .with_statuses(statuses))
    }
}

/// Response body for `GET /api/applications`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of returned applications.
    pub total: usize,
    /// Matching applications, most recently updated first.
    pub applications: Vec<ApplicationRecord>,
}

/// Response body carrying a single application.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    /// Always `true`.
    pub success: bool,
    /// The application.
    pub application: ApplicationRecord,
}

/// Request body for `PATCH /api/applications/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// New status: one of `submitted`, `accepted`, `waitlisted`, `rejected`, `confirmed`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body for `POST /api/applications/import`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of inserted applications.
    pub imported: usize,
    /// IDs assigned to the inserted applications.
    pub ids: Vec<i64>,
}
