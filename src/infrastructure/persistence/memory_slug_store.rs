//! In-process implementation of the slug store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewRecord, SlugRecord};
use crate::domain::repositories::SlugStore;
use crate::error::RegistryError;

/// `DashMap`-backed store.
///
/// Insert goes through the map's entry API and the increment through
/// `get_mut`; both hold the shard write lock for the whole operation, which
/// gives the same atomicity the PostgreSQL store gets from its constraint and
/// `UPDATE`. No guard is held across an `.await`.
///
/// State is per process: use it for tests and single-instance deployments.
#[derive(Debug, Default)]
pub struct MemorySlugStore {
    records: DashMap<String, SlugRecord>,
}

impl MemorySlugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SlugStore for MemorySlugStore {
    async fn insert(&self, new_record: NewRecord) -> Result<SlugRecord, RegistryError> {
        match self.records.entry(new_record.slug.clone()) {
            Entry::Occupied(_) => Err(RegistryError::duplicate(new_record.slug)),
            Entry::Vacant(slot) => {
                let record = SlugRecord::fresh(new_record);
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        Ok(self.records.get(slug).map(|r| r.value().clone()))
    }

    async fn increment_hits(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        Ok(self.records.get_mut(slug).map(|mut r| {
            r.hits += 1;
            r.value().clone()
        }))
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        Ok(())
    }
}
