//! Catalog home page handler.

use axum::extract::State;
use axum::Json;

use crate::aggregate;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::CatalogSummary;

/// GET /api/v1/catalog -- movie and director counts, fetched concurrently.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<CatalogSummary>> {
    let summary = aggregate::catalog_summary(&state.pool).await?;
    Ok(Json(summary))
}
