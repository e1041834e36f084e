//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase on the wire, matching the record fields and
//! the CSV import headers. Successful responses carry `"success": true`.

pub mod application_dto;
pub mod auth_dto;
pub mod stats_dto;

pub use application_dto::*;
pub use auth_dto::*;
pub use stats_dto::*;
