//! Handler for slug record inspection.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::create::RecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current record for a slug without counting a hit.
///
/// # Endpoint
///
/// `GET /{slug}/stats`
pub async fn stats_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>, AppError> {
    let record = state.registry.lookup(&slug).await?;
    Ok(Json(record.into()))
}
