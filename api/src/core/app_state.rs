use std::sync::Arc;

use ai_llm_service::{LlmService, TextGenerator};
use catalog::Catalog;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Everything here is read-only after startup, so handlers share it behind
/// an `Arc` with no further coordination.
pub struct AppState {
    /// The validated party/politician tables.
    pub catalog: Catalog,
    /// Upstream text generation for the chat endpoint.
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Builds shared state from the environment.
    ///
    /// # Errors
    /// - [`AppError::Catalog`] if the embedded data fails to parse or validate
    /// - [`AppError::LlmConfig`] if the provider config (notably the API key)
    ///   cannot be resolved — the process must not start without it
    pub fn from_env() -> Result<Self, AppError> {
        let catalog = Catalog::load()?;
        let llm = LlmService::from_env().map_err(AppError::LlmConfig)?;

        Ok(Self {
            catalog,
            generator: Arc::new(llm),
        })
    }

    /// Builds state around an explicit generator. Used by tests to stand in
    /// for the upstream API.
    pub fn with_generator(catalog: Catalog, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }
}
