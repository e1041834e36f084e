//! Login and session DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Shared admin login name.
    #[serde(default)]
    pub username: String,
    /// Shared admin password.
    #[serde(default)]
    pub password: String,
}

/// Response body for login and logout.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// `true` when the operation succeeded.
    pub success: bool,
}

/// Response body for `GET /api/auth/session`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Whether the request carried a live admin session.
    pub authenticated: bool,
}
