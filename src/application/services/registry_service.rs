//! Slug registry: creation, lookup and hit counting.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{NewRecord, SlugRecord};
use crate::domain::repositories::SlugStore;
use crate::error::RegistryError;
use crate::utils::slug_validator::{is_storable_slug, validate_slug, validate_target};

/// Owns the slug lifecycle and hit counting.
///
/// The registry validates input and classifies outcomes; it keeps no cache,
/// lock or counter of its own. Every call maps to exactly one atomic store
/// operation, so several registries (in one process or many) can share a
/// store safely.
///
/// Errors are returned as-is and never retried here. Retrying a
/// [`RegistryError::DuplicateSlug`] would fail again; whether to retry a
/// [`RegistryError::StoreUnavailable`] is the caller's decision.
#[derive(Clone)]
pub struct SlugRegistry {
    store: Arc<dyn SlugStore>,
}

impl SlugRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn SlugStore>) -> Self {
        Self { store }
    }

    /// Registers a new slug pointing at `target_url`.
    ///
    /// Uniqueness is checked by the store in the same operation that inserts
    /// the record; there is no prior existence check.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] if the slug or target is invalid
    /// - [`RegistryError::DuplicateSlug`] if the slug is already registered
    /// - [`RegistryError::StoreUnavailable`] on store failures
    pub async fn create(
        &self,
        slug: String,
        target_url: String,
    ) -> Result<SlugRecord, RegistryError> {
        validate_slug(&slug)?;
        validate_target(&target_url)?;

        match self.store.insert(NewRecord { slug, target_url }).await {
            Ok(record) => {
                metrics::counter!("slug_registry_creates_total", "outcome" => "created")
                    .increment(1);
                info!(slug = %record.slug, target_url = %record.target_url, "Slug created");
                Ok(record)
            }
            Err(RegistryError::DuplicateSlug { slug }) => {
                metrics::counter!("slug_registry_creates_total", "outcome" => "duplicate")
                    .increment(1);
                warn!(%slug, "Slug already exists");
                Err(RegistryError::DuplicateSlug { slug })
            }
            Err(e) => {
                metrics::counter!("slug_registry_creates_total", "outcome" => "error")
                    .increment(1);
                error!(error = %e, "Failed to create slug");
                Err(e)
            }
        }
    }

    /// Returns the current record for a slug. No side effects.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the slug is not registered
    /// - [`RegistryError::StoreUnavailable`] on store failures
    pub async fn lookup(&self, slug: &str) -> Result<SlugRecord, RegistryError> {
        if !is_storable_slug(slug) {
            return Err(RegistryError::not_found(slug));
        }

        let found = self.store.find(slug).await.inspect_err(|e| {
            error!(%slug, error = %e, "Lookup failed");
        })?;

        match found {
            Some(record) => {
                metrics::counter!("slug_registry_lookups_total", "outcome" => "found")
                    .increment(1);
                debug!(%slug, hits = record.hits, "Slug found");
                Ok(record)
            }
            None => {
                metrics::counter!("slug_registry_lookups_total", "outcome" => "missing")
                    .increment(1);
                debug!(%slug, "Slug not found");
                Err(RegistryError::not_found(slug))
            }
        }
    }

    /// Counts one access to a slug and returns the updated record.
    ///
    /// The increment happens inside the store, so concurrent calls on the
    /// same slug never lose updates. A missing slug is reported without
    /// touching the store's contents.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the slug is not registered
    /// - [`RegistryError::StoreUnavailable`] on store failures
    pub async fn record_hit(&self, slug: &str) -> Result<SlugRecord, RegistryError> {
        if !is_storable_slug(slug) {
            return Err(RegistryError::not_found(slug));
        }

        let updated = self.store.increment_hits(slug).await.inspect_err(|e| {
            error!(%slug, error = %e, "Failed to record hit");
        })?;

        let record = updated.ok_or_else(|| RegistryError::not_found(slug))?;
        metrics::counter!("slug_registry_hits_total").increment(1);
        debug!(%slug, hits = record.hits, "Hit recorded");

        Ok(record)
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] if the store does not respond.
    pub async fn health_check(&self) -> Result<(), RegistryError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSlugStore;
    use chrono::Utc;

    fn create_test_record(slug: &str, url: &str, hits: i64) -> SlugRecord {
        SlugRecord::new(slug.to_string(), url.to_string(), Utc::now(), hits)
    }

    fn registry(store: MockSlugStore) -> SlugRegistry {
        SlugRegistry::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_store = MockSlugStore::new();

        let created = create_test_record("stackoverflow", "https://stackoverflow.com", 0);
        mock_store
            .expect_insert()
            .withf(|r| r.slug == "stackoverflow" && r.target_url == "https://stackoverflow.com")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let result = registry(mock_store)
            .create(
                "stackoverflow".to_string(),
                "https://stackoverflow.com".to_string(),
            )
            .await;

        let record = result.unwrap();
        assert_eq!(record.slug, "stackoverflow");
        assert_eq!(record.hits, 0);
    }

    #[tokio::test]
    async fn test_create_does_not_read_before_insert() {
        let mut mock_store = MockSlugStore::new();

        mock_store.expect_find().times(0);
        let created = create_test_record("github", "https://github.com", 0);
        mock_store
            .expect_insert()
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let result = registry(mock_store)
            .create("github".to_string(), "https://github.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_surfaced() {
        let mut mock_store = MockSlugStore::new();

        mock_store
            .expect_insert()
            .times(1)
            .returning(|r| Err(RegistryError::duplicate(r.slug)));

        let result = registry(mock_store)
            .create("google".to_string(), "https://other.com".to_string())
            .await;

        assert_eq!(result.unwrap_err(), RegistryError::duplicate("google"));
    }

    #[tokio::test]
    async fn test_create_store_failure_is_surfaced() {
        let mut mock_store = MockSlugStore::new();

        mock_store
            .expect_insert()
            .times(1)
            .returning(|_| Err(RegistryError::unavailable("connection reset")));

        let result = registry(mock_store)
            .create("python".to_string(), "https://python.org".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RegistryError::StoreUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_invalid_slug_skips_store() {
        let mut mock_store = MockSlugStore::new();
        mock_store.expect_insert().times(0);

        let registry = registry(mock_store);

        let empty = registry
            .create(String::new(), "https://example.com".to_string())
            .await;
        assert!(matches!(
            empty.unwrap_err(),
            RegistryError::InvalidInput { field: "slug", .. }
        ));

        let too_long = registry
            .create("x".repeat(31), "https://example.com".to_string())
            .await;
        assert!(matches!(
            too_long.unwrap_err(),
            RegistryError::InvalidInput { field: "slug", .. }
        ));
    }

    #[tokio::test]
    async fn test_nul_slug_never_reaches_store() {
        let mut mock_store = MockSlugStore::new();
        mock_store.expect_insert().times(0);
        mock_store.expect_find().times(0);
        mock_store.expect_increment_hits().times(0);

        let registry = registry(mock_store);

        let created = registry
            .create("a\0b".to_string(), "https://example.com".to_string())
            .await;
        assert!(matches!(
            created.unwrap_err(),
            RegistryError::InvalidInput { field: "slug", .. }
        ));

        assert!(matches!(
            registry.lookup("a\0b").await.unwrap_err(),
            RegistryError::NotFound { .. }
        ));
        assert!(matches!(
            registry.record_hit("\0").await.unwrap_err(),
            RegistryError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_empty_target_skips_store() {
        let mut mock_store = MockSlugStore::new();
        mock_store.expect_insert().times(0);

        let result = registry(mock_store)
            .create("empty".to_string(), String::new())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RegistryError::InvalidInput {
                field: "target_url",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let mut mock_store = MockSlugStore::new();

        let existing = create_test_record("python", "https://python.org", 4);
        mock_store
            .expect_find()
            .withf(|slug| slug == "python")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let record = registry(mock_store).lookup("python").await.unwrap();

        assert_eq!(record.target_url, "https://python.org");
        assert_eq!(record.hits, 4);
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let mut mock_store = MockSlugStore::new();
        mock_store.expect_find().times(1).returning(|_| Ok(None));

        let result = registry(mock_store).lookup("nonexistent").await;

        assert_eq!(result.unwrap_err(), RegistryError::not_found("nonexistent"));
    }

    #[tokio::test]
    async fn test_lookup_unstorable_slug_skips_store() {
        let mut mock_store = MockSlugStore::new();
        mock_store.expect_find().times(0);

        let result = registry(mock_store).lookup(&"y".repeat(40)).await;

        assert!(matches!(result.unwrap_err(), RegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_hit_uses_store_increment() {
        let mut mock_store = MockSlugStore::new();

        mock_store.expect_find().times(0);
        let updated = create_test_record("twitter", "https://twitter.com", 1);
        mock_store
            .expect_increment_hits()
            .withf(|slug| slug == "twitter")
            .times(1)
            .returning(move |_| Ok(Some(updated.clone())));

        let record = registry(mock_store).record_hit("twitter").await.unwrap();

        assert_eq!(record.hits, 1);
    }

    #[tokio::test]
    async fn test_record_hit_missing() {
        let mut mock_store = MockSlugStore::new();
        mock_store
            .expect_increment_hits()
            .times(1)
            .returning(|_| Ok(None));

        let result = registry(mock_store).record_hit("missing").await;

        assert_eq!(result.unwrap_err(), RegistryError::not_found("missing"));
    }

    #[tokio::test]
    async fn test_record_hit_store_failure_is_not_retried() {
        let mut mock_store = MockSlugStore::new();
        mock_store
            .expect_increment_hits()
            .times(1)
            .returning(|_| Err(RegistryError::unavailable("timeout")));

        let result = registry(mock_store).record_hit("twitter").await;

        assert!(matches!(
            result.unwrap_err(),
            RegistryError::StoreUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_health_check_propagates_store_failure() {
        let mut mock_store = MockSlugStore::new();
        mock_store
            .expect_ping()
            .times(1)
            .returning(|| Err(RegistryError::unavailable("down")));

        assert!(registry(mock_store).health_check().await.is_err());
    }
}
