//! REST endpoint handlers organized by resource.

pub mod applications;
pub mod auth;
pub mod stats;
pub mod system;
