//! Statistics DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::stats::StatisticsReport;

/// Response body for `GET /api/stats`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Always `true`.
    pub success: bool,
    /// Report over the complete current record set.
    pub stats: StatisticsReport,
}
