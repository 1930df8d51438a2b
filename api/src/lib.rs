//! HTTP surface for the VoteWise backend.
//!
//! Four routes over a read-only catalog plus one chat bridge:
//!
//! - `GET  /api/parties`                      — party summaries
//! - `GET  /api/party/{partyId}`              — full party, photos resolved
//! - `GET  /api/politician/{politicianId}`    — full politician record
//! - `POST /api/chatbot`                      — question + catalog context → LLM
//!
//! [`start`] builds everything from the environment and serves until
//! Ctrl+C; [`app`] builds the router for a given state so tests can drive
//! it directly.

use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::routes::{
    chatbot::chatbot_route::chatbot, parties_route::list_parties, party_route::party_detail,
    politician_route::politician_detail,
};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

/// Builds the application router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/parties", get(list_parties))
        .route("/api/party/{party_id}", get(party_detail))
        .route("/api/politician/{politician_id}", get(politician_detail))
        .route("/api/chatbot", post(chatbot))
        .with_state(state)
}

/// Loads state from the environment and serves the API.
///
/// Binds to `API_ADDRESS` (default `0.0.0.0:3000`). Startup fails if the
/// embedded catalog does not validate or the LLM credential is absent.
///
/// # Errors
/// - [`AppError::Catalog`] / [`AppError::LlmConfig`] for bad startup state
/// - [`AppError::Bind`] / [`AppError::Server`] for listener and serve errors
pub async fn start() -> AppResult<()> {
    let addr = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let state = Arc::new(AppState::from_env()?);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, "VoteWise server is running");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
