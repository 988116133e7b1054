//! DTOs for slug creation and record views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::SlugRecord;

/// Request to register a slug.
///
/// Only presence is checked here; length limits are enforced by the registry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: String,

    #[validate(length(min = 1, message = "target_url must not be empty"))]
    pub target_url: String,
}

/// A slug record as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub slug: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub hits: i64,
}

impl From<SlugRecord> for RecordResponse {
    fn from(r: SlugRecord) -> Self {
        Self {
            slug: r.slug,
            target_url: r.target_url,
            created_at: r.created_at,
            hits: r.hits,
        }
    }
}
