//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use crate::api::dto::{
    ApplicationListResponse, ApplicationResponse, AuthResponse, ImportResponse, LoginRequest,
    SessionResponse, StatsResponse, UpdateStatusRequest,
};
use crate::api::handlers::{applications, auth, stats, system};
use crate::domain::{ApplicationRecord, ApplicationStatus};
use crate::error::{ErrorBody, ErrorResponse};
use crate::stats::{LinkCounts, StatisticsReport, TeammateStats};

/// Generated OpenAPI specification for the admin API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Hackathon Admin API",
        description = "Review hackathon applications and inspect applicant statistics."
    ),
    paths(
        auth::login,
        auth::logout,
        auth::session,
        applications::list_applications,
        applications::get_application,
        applications::update_status,
        applications::import_applications,
        stats::get_stats,
        system::health_handler,
    ),
    components(schemas(
        ApplicationRecord,
        ApplicationStatus,
        ApplicationListResponse,
        ApplicationResponse,
        UpdateStatusRequest,
        ImportResponse,
        LoginRequest,
        AuthResponse,
        SessionResponse,
        StatsResponse,
        StatisticsReport,
        LinkCounts,
        TeammateStats,
        system::HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Auth", description = "Admin session management"),
        (name = "Applications", description = "Application review workflow"),
        (name = "Statistics", description = "Aggregate applicant statistics"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
