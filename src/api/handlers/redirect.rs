//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target and counts the access.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// The hit is recorded with a single atomic increment that also returns the
/// target, so a missing slug costs one store round trip and counts nothing.
///
/// # Errors
///
/// - 404 Not Found if the slug is not registered
/// - 503 Service Unavailable if the store cannot be reached
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.registry.record_hit(&slug).await?;

    let location = HeaderValue::from_str(&record.target_url).map_err(|_| {
        AppError::internal(
            "Stored target cannot be used as a redirect",
            json!({ "slug": record.slug }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
