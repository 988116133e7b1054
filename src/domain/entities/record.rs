//! Slug record entity.

use chrono::{DateTime, Utc};

/// Maximum slug length in bytes.
pub const MAX_SLUG_BYTES: usize = 30;

/// A stored slug mapping.
///
/// `slug`, `target_url` and `created_at` never change once the record exists.
/// `hits` only moves forward, one access at a time, through
/// [`crate::domain::repositories::SlugStore::increment_hits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRecord {
    pub slug: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub hits: i64,
}

impl SlugRecord {
    pub fn new(slug: String, target_url: String, created_at: DateTime<Utc>, hits: i64) -> Self {
        Self {
            slug,
            target_url,
            created_at,
            hits,
        }
    }

    /// A freshly created record: stamped now, no hits yet.
    pub fn fresh(new_record: NewRecord) -> Self {
        Self::new(new_record.slug, new_record.target_url, Utc::now(), 0)
    }
}

/// Input data for creating a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub slug: String,
    pub target_url: String,
}

impl NewRecord {
    pub fn new(slug: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            target_url: target_url.into(),
        }
    }
}
