//! Service layer: business logic orchestration.
//!
//! [`ApplicationService`] validates requests, delegates storage to the
//! [`crate::store::ApplicationStore`], and runs the statistics engine over
//! fetched snapshots.

pub mod application_service;

pub use application_service::ApplicationService;
