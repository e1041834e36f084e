//! # hackathon-admin
//!
//! Admin dashboard API for a hackathon's application pipeline.
//!
//! Organizers log in with a shared admin account, browse and search
//! submitted applications, move them through the review statuses, and
//! read aggregate statistics (answer distributions, word frequencies,
//! submission timeline, link and theme counts) over every application.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + session guard (api/)
//!     │
//!     ├── ApplicationService (service/)
//!     ├── Statistics engine (stats/)
//!     ├── CSV import (import)
//!     │
//!     └── ApplicationStore (store/)
//!           ├── in-memory
//!           └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod service;
pub mod stats;
pub mod store;
