//! GET /api/parties — reduced party summaries for the listing page.

use std::sync::Arc;

use axum::{Json, extract::State};
use catalog::PartySummary;

use crate::core::app_state::AppState;

/// Handler: GET /api/parties
///
/// Always returns the complete set, in catalog order. No filtering,
/// sorting, or pagination.
pub async fn list_parties(State(state): State<Arc<AppState>>) -> Json<Vec<PartySummary>> {
    Json(state.catalog.summaries())
}
