//! In-memory application store.
//!
//! [`MemoryApplicationStore`] keeps every record in a `BTreeMap` behind a
//! single [`tokio::sync::RwLock`]. Reads run concurrently; inserts and
//! status updates are serialized. Used by tests and when persistence is
//! disabled.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    ApplicationFilter, ApplicationId, ApplicationRecord, ApplicationStatus, NewApplication,
};
use crate::error::AdminError;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    records: BTreeMap<ApplicationId, ApplicationRecord>,
}

impl MemoryState {
    fn insert(&mut self, new: NewApplication) -> ApplicationRecord {
        self.last_id += 1;
        let id = ApplicationId::new(self.last_id);
        let record = ApplicationRecord::from_new(id, new, Utc::now());
        self.records.insert(id, record.clone());
        record
    }
}

/// Volatile store for application records.
#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    state: RwLock<MemoryState>,
}

impl MemoryApplicationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record in ID order.
    pub async fn list_all(&self) -> Vec<ApplicationRecord> {
        self.state.read().await.records.values().cloned().collect()
    }

    /// Returns records matching `filter`, most recently updated first.
    pub async fn list(&self, filter: &ApplicationFilter) -> Vec<ApplicationRecord> {
        let state = self.state.read().await;
        let mut matched: Vec<ApplicationRecord> = state
            .records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        matched
    }

    /// Returns a single record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] if no record has `id`.
    pub async fn get(&self, id: ApplicationId) -> Result<ApplicationRecord, AdminError> {
        self.state
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or(AdminError::ApplicationNotFound(id.get()))
    }

    /// Inserts a record, assigning the next ID.
    pub async fn insert(&self, new: NewApplication) -> ApplicationRecord {
        self.state.write().await.insert(new)
    }

    /// Inserts all records under one lock so readers never observe a
    /// partial batch.
    pub async fn insert_many(&self, batch: Vec<NewApplication>) -> Vec<ApplicationRecord> {
        let mut state = self.state.write().await;
        batch.into_iter().map(|new| state.insert(new)).collect()
    }

    /// Sets a record's status and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] if no record has `id`.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, AdminError> {
        let mut state = self.state.write().await;
        let record = state
            .records
            .get_mut(&id)
            .ok_or(AdminError::ApplicationNotFound(id.get()))?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> usize {
        self.state.read().await.records.len()
    }
}
