//! GET /api/party/{partyId} — full party record with resolved politicians.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use catalog::PartyDetail;

use crate::{core::app_state::AppState, error_handler::AppError};

/// Handler: GET /api/party/{partyId}
///
/// The party's politician references come back enriched with each
/// politician's photo.
pub async fn party_detail(
    State(state): State<Arc<AppState>>,
    Path(party_id): Path<String>,
) -> Result<Json<PartyDetail>, AppError> {
    state
        .catalog
        .party(&party_id)
        .map(Json)
        .ok_or(AppError::PartyNotFound)
}
