//! Immutable record collections and the store trait

use std::ops::Deref;
use std::sync::Arc;

use crate::core::entity::Record;
use crate::core::error::StoreError;
use crate::core::filter::Criteria;
use crate::core::query::{self, Page, PageRequest, SortConfig, SortKey};

/// An immutable, cheaply clonable snapshot of records
///
/// Cloning shares the underlying slice. Writes never happen in place:
/// [`Collection::replace`] builds a new collection and leaves every
/// existing snapshot untouched.
#[derive(Debug)]
pub struct Collection<T> {
    records: Arc<[T]>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> Collection<T> {
    /// Whether two snapshots share the same allocation
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<T: Record> Collection<T> {
    /// First record with this id
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Build a new collection where the record with `id` is replaced by
    /// `update(record)`; position in the sequence is preserved
    ///
    /// With duplicate ids only the first match is replaced.
    pub fn replace<F>(&self, id: &str, update: F) -> Result<Self, StoreError>
    where
        F: FnOnce(&T) -> T,
    {
        self.try_replace(id, |record| Ok(update(record)))
    }

    /// Like [`Collection::replace`], but `update` may refuse the write
    pub fn try_replace<F>(&self, id: &str, update: F) -> Result<Self, StoreError>
    where
        F: FnOnce(&T) -> Result<T, StoreError>,
    {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: T::entity_type(),
                id: id.to_string(),
            })?;

        let mut records = self.records.to_vec();
        records[position] = update(&self.records[position])?;
        Ok(records.into())
    }
}

/// Trait for stores that serve snapshots to the query pipeline
///
/// Readers take a snapshot first and query it afterwards, so a concurrent
/// write is either fully visible or not visible at all.
pub trait QueryableStore<T: Record>: Send + Sync {
    /// Current snapshot of all records (unfiltered, unsorted)
    fn snapshot(&self) -> Collection<T>;

    /// Run the query pipeline against the current snapshot
    fn query<C, K>(&self, criteria: &C, sort: SortConfig<K>, request: PageRequest) -> Page<T>
    where
        C: Criteria<T> + ?Sized,
        K: SortKey<T>,
    {
        let snapshot = self.snapshot();
        query::run(&snapshot, criteria, sort, request)
    }
}
