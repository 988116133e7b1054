//! PostgreSQL implementation of the slug store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRecord, SlugRecord};
use crate::domain::repositories::SlugStore;
use crate::error::RegistryError;
use crate::utils::db_error::is_unique_violation_on_slug;

#[derive(sqlx::FromRow)]
struct RecordRow {
    slug: String,
    target_url: String,
    created_at: DateTime<Utc>,
    hits: i64,
}

impl From<RecordRow> for SlugRecord {
    fn from(r: RecordRow) -> Self {
        SlugRecord::new(r.slug, r.target_url, r.created_at, r.hits)
    }
}

/// PostgreSQL store for slug records.
///
/// Uniqueness comes from the `urls` primary key, and hit counting is a single
/// `UPDATE ... SET hits = hits + 1`, so both hold across any number of
/// service instances sharing the database.
pub struct PgSlugStore {
    pool: Arc<PgPool>,
}

impl PgSlugStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugStore for PgSlugStore {
    async fn insert(&self, new_record: NewRecord) -> Result<SlugRecord, RegistryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            INSERT INTO urls (slug, target_url)
            VALUES ($1, $2)
            RETURNING slug, target_url, created_at, hits
            "#,
        )
        .bind(&new_record.slug)
        .bind(&new_record.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                RegistryError::duplicate(&new_record.slug)
            } else {
                RegistryError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT slug, target_url, created_at, hits
            FROM urls
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(SlugRecord::from))
    }

    async fn increment_hits(&self, slug: &str) -> Result<Option<SlugRecord>, RegistryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            UPDATE urls
            SET hits = hits + 1
            WHERE slug = $1
            RETURNING slug, target_url, created_at, hits
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(SlugRecord::from))
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
