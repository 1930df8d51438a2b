//! GET /api/politician/{politicianId} — full politician record.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use catalog::Politician;

use crate::{core::app_state::AppState, error_handler::AppError};

/// Handler: GET /api/politician/{politicianId}
pub async fn politician_detail(
    State(state): State<Arc<AppState>>,
    Path(politician_id): Path<String>,
) -> Result<Json<Politician>, AppError> {
    state
        .catalog
        .politician(&politician_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::PoliticianNotFound)
}
