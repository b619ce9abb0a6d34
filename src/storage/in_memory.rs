//! In-memory snapshot store

use crate::core::error::StoreError;
use crate::core::store::{Collection, QueryableStore};
use crate::core::Record;
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory store holding one immutable snapshot at a time
///
/// Readers clone the current snapshot (an `Arc` bump). Writers build a
/// replacement collection and swap it in; a poisoned lock still holds a
/// complete snapshot and is recovered.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    current: Arc<RwLock<Collection<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create a store seeded with `records`
    pub fn new(records: impl Into<Collection<T>>) -> Self {
        let records = records.into();
        tracing::debug!(
            entity_type = T::entity_type(),
            count = records.len(),
            "store seeded"
        );
        Self {
            current: Arc::new(RwLock::new(records)),
        }
    }

    /// Number of records in the current snapshot
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record with this id in the current snapshot
    pub fn get(&self, id: &str) -> Option<T> {
        self.snapshot().get(id).cloned()
    }

    /// Replace one record and publish the resulting snapshot
    ///
    /// The new snapshot is returned so the caller can re-query it directly.
    pub fn replace<F>(&self, id: &str, update: F) -> Result<Collection<T>, StoreError>
    where
        F: FnOnce(&T) -> T,
    {
        self.try_replace(id, |record| Ok(update(record)))
    }

    /// Replace one record if `update` accepts it
    ///
    /// `update` runs under the write lock.
    pub fn try_replace<F>(&self, id: &str, update: F) -> Result<Collection<T>, StoreError>
    where
        F: FnOnce(&T) -> Result<T, StoreError>,
    {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.try_replace(id, update)?;
        *current = next.clone();

        tracing::info!(entity_type = T::entity_type(), id = %id, "record replaced");
        Ok(next)
    }

    /// Swap in a whole new collection
    pub fn reset(&self, records: impl Into<Collection<T>>) -> Collection<T> {
        let records = records.into();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = records.clone();

        tracing::info!(
            entity_type = T::entity_type(),
            count = records.len(),
            "store reset"
        );
        records
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new(Collection::default())
    }
}

impl<T: Record> QueryableStore<T> for InMemoryStore<T> {
    fn snapshot(&self) -> Collection<T> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
