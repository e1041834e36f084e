//! Domain layer: applicant records, statuses, search filters, and admin sessions.
//!
//! This module contains the server-side domain model including application
//! identity, the status enumeration, the typed list filter, and the session
//! store that gates the admin API.

pub mod application;
pub mod application_id;
pub mod filter;
pub mod session;
pub mod status;

pub use application::{ApplicationRecord, NewApplication};
pub use application_id::ApplicationId;
pub use filter::ApplicationFilter;
pub use session::{SessionStore, SessionToken};
pub use status::ApplicationStatus;
