//! Store trait for slug records.

use crate::domain::entities::{NewRecord, SlugRecord};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Durable, constraint-enforcing storage for slug records.
///
/// Every method is a single atomic operation against the backend. Callers
/// must not combine them into read-then-write sequences: uniqueness and
/// counter updates are only race-free because the backend evaluates them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSlugStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemorySlugStore`] - in-process `DashMap`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlugStore: Send + Sync {
    /// Inserts a new record, enforcing slug uniqueness at insert time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSlug`] if the slug is already taken.
    /// The failed attempt leaves no trace.
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on any other backend failure.
    async fn insert(&self, new_record: NewRecord) -> Result<SlugRecord, RegistryError>;

    /// Finds the record for a slug.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on backend failures.
    async fn find(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError>;

    /// Atomically adds one to the slug's hit counter and returns the updated record.
    ///
    /// Returns `Ok(None)` without mutating anything if the slug does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on backend failures.
    async fn increment_hits(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), RegistryError>;
}
