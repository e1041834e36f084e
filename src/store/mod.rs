//! Record store: the source of application records.
//!
//! [`ApplicationStore`] dispatches to either an in-memory backend or a
//! PostgreSQL backend. Every fetch failure surfaces as
//! [`AdminError::PersistenceError`] and is never retried here.

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryApplicationStore;
pub use postgres::PostgresApplicationStore;

use crate::domain::{
    ApplicationFilter, ApplicationId, ApplicationRecord, ApplicationStatus, NewApplication,
};
use crate::error::AdminError;

/// Storage backend for application records.
#[derive(Debug)]
pub enum ApplicationStore {
    /// Volatile, process-local storage.
    Memory(MemoryApplicationStore),
    /// PostgreSQL via `sqlx`.
    Postgres(PostgresApplicationStore),
}

impl ApplicationStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::Memory(MemoryApplicationStore::new())
    }

    /// Returns a short backend name for logging.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Returns the complete record set, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PersistenceError`] if the backend is unreachable.
    pub async fn list_all(&self) -> Result<Vec<ApplicationRecord>, AdminError> {
        match self {
            Self::Memory(store) => Ok(store.list_all().await),
            Self::Postgres(store) => store.list_all().await,
        }
    }

    /// Returns records matching `filter`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PersistenceError`] if the backend is unreachable.
    pub async fn list(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRecord>, AdminError> {
        match self {
            Self::Memory(store) => Ok(store.list(filter).await),
            Self::Postgres(store) => store.list(filter).await,
        }
    }

    /// Returns a single record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] for an unknown ID.
    pub async fn get(&self, id: ApplicationId) -> Result<ApplicationRecord, AdminError> {
        match self {
            Self::Memory(store) => store.get(id).await,
            Self::Postgres(store) => store.get(id).await,
        }
    }

    /// Inserts one record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PersistenceError`] on backend failure.
    pub async fn insert(&self, new: NewApplication) -> Result<ApplicationRecord, AdminError> {
        match self {
            Self::Memory(store) => Ok(store.insert(new).await),
            Self::Postgres(store) => store.insert(new).await,
        }
    }

    /// Inserts a batch atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PersistenceError`] on backend failure; no
    /// record of the batch is stored in that case.
    pub async fn insert_many(
        &self,
        batch: Vec<NewApplication>,
    ) -> Result<Vec<ApplicationRecord>, AdminError> {
        match self {
            Self::Memory(store) => Ok(store.insert_many(batch).await),
            Self::Postgres(store) => store.insert_many(batch).await,
        }
    }

    /// Sets a record's status and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] for an unknown ID.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, AdminError> {
        match self {
            Self::Memory(store) => store.update_status(id, status).await,
            Self::Postgres(store) => store.update_status(id, status).await,
        }
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PersistenceError`] on backend failure.
    pub async fn count(&self) -> Result<usize, AdminError> {
        match self {
            Self::Memory(store) => Ok(store.count().await),
            Self::Postgres(store) => store.count().await,
        }
    }
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
