#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use slug_registry::application::services::SlugRegistry;
use slug_registry::domain::entities::{NewRecord, SlugRecord};
use slug_registry::domain::repositories::SlugStore;
use slug_registry::error::RegistryError;
use slug_registry::infrastructure::persistence::{MemorySlugStore, PgSlugStore};
use slug_registry::routes::router;
use slug_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Store that fails every call, standing in for a lost database connection.
pub struct UnavailableStore;

#[async_trait]
impl SlugStore for UnavailableStore {
    async fn insert(&self, _new_record: NewRecord) -> Result<SlugRecord, RegistryError> {
        Err(RegistryError::unavailable("connection refused"))
    }

    async fn find(&self, _slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        Err(RegistryError::unavailable("connection refused"))
    }

    async fn increment_hits(&self, _slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        Err(RegistryError::unavailable("connection refused"))
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        Err(RegistryError::unavailable("connection refused"))
    }
}

pub fn memory_registry() -> Arc<SlugRegistry> {
    Arc::new(SlugRegistry::new(Arc::new(MemorySlugStore::new())))
}

pub fn pg_registry(pool: PgPool) -> Arc<SlugRegistry> {
    Arc::new(SlugRegistry::new(Arc::new(PgSlugStore::new(Arc::new(pool)))))
}

/// Test server over a fresh in-memory store, plus the registry behind it.
pub fn memory_server() -> (TestServer, Arc<SlugRegistry>) {
    let registry = memory_registry();
    let server = TestServer::new(router(AppState::new(registry.clone()))).unwrap();
    (server, registry)
}

pub fn unavailable_server() -> TestServer {
    let state = AppState::from_store(Arc::new(UnavailableStore));
    TestServer::new(router(state)).unwrap()
}

pub async fn insert_record(pool: &PgPool, slug: &str, url: &str) {
    sqlx::query("INSERT INTO urls (slug, target_url) VALUES ($1, $2)")
        .bind(slug)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_records(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
