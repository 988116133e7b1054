//! Handler for slug creation.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create::{CreateRequest, RecordResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug_validator::is_redirectable_target;

/// Slugs that would be shadowed by fixed routes.
const RESERVED_SLUGS: &[&str] = &["create", "health"];

/// Registers a caller-chosen slug for a target URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "slug": "stackoverflow", "target_url": "https://stackoverflow.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "slug": "stackoverflow",
///   "target_url": "https://stackoverflow.com",
///   "created_at": "2025-01-01T00:00:00Z",
///   "hits": 0
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is invalid, the slug is reserved, or the
///   target cannot be sent as a `Location` header
/// - 409 Conflict if the slug is already registered
/// - 503 Service Unavailable if the store cannot be reached
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    payload.validate()?;

    if RESERVED_SLUGS.contains(&payload.slug.as_str()) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": payload.slug }),
        ));
    }

    if !is_redirectable_target(&payload.target_url) {
        return Err(AppError::bad_request(
            "target_url cannot be used as a redirect location",
            json!({ "field": "target_url" }),
        ));
    }

    let record = state
        .registry
        .create(payload.slug, payload.target_url)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
