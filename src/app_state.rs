//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::SessionStore;
use crate::service::ApplicationService;

/// The single shared admin login.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    /// Creates credentials from configured values.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns `true` if both values match.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        // evaluate both so timing does not reveal which one mismatched
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application service for all business logic.
    pub application_service: Arc<ApplicationService>,
    /// Live admin sessions.
    pub sessions: Arc<SessionStore>,
    /// Shared admin login.
    pub credentials: Arc<AdminCredentials>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_requires_both_values() {
        let creds = AdminCredentials::new("admin", "admin123");
        assert!(creds.verify("admin", "admin123"));
        assert!(!creds.verify("admin", "admin124"));
        assert!(!creds.verify("root", "admin123"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = AdminCredentials::new("admin", "s3cret");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("s3cret"));
    }
}
