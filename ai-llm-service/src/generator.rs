//! Provider-agnostic generation seam.
//!
//! [`TextGenerator`] is the one capability the HTTP layer needs from this
//! crate: turn an assembled prompt into generated text. [`LlmService`] is
//! the production implementation, dispatching to whichever provider client
//! the config selects; tests substitute their own implementations.

use async_trait::async_trait;

use crate::{
    config::{
        default_config::config_from_env, llm_model_config::LlmModelConfig,
        llm_provider::LlmProvider,
    },
    error_handler::AiLlmError,
    services::{gemini_service::GeminiService, open_ai_service::OpenAiService},
};

/// The opaque `generate(prompt) -> text` function the chat endpoint calls.
///
/// One awaited request per call; implementations do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for the assembled prompt.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] for transport failures, non-2xx upstream
    /// statuses, undecodable payloads, and empty completions.
    async fn generate(&self, prompt: &str) -> Result<String, AiLlmError>;
}

/// Production [`TextGenerator`]: one provider client, chosen by config.
pub enum LlmService {
    Gemini(GeminiService),
    OpenAi(OpenAiService),
}

impl LlmService {
    /// Builds the provider client named by `cfg.provider`.
    ///
    /// # Errors
    /// Propagates the client constructor's validation errors (wrong
    /// provider, missing API key, invalid endpoint).
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        match cfg.provider {
            LlmProvider::Gemini => Ok(Self::Gemini(GeminiService::new(cfg)?)),
            LlmProvider::OpenAI => Ok(Self::OpenAi(OpenAiService::new(cfg)?)),
        }
    }

    /// Builds the service from environment variables.
    ///
    /// Intended to run once at startup; a missing credential surfaces here
    /// and the caller treats it as fatal.
    ///
    /// # Errors
    /// Propagates [`AiLlmError::Config`] from env resolution and the client
    /// constructor's validation errors.
    pub fn from_env() -> Result<Self, AiLlmError> {
        Self::new(config_from_env()?)
    }
}

#[async_trait]
impl TextGenerator for LlmService {
    async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        match self {
            Self::Gemini(client) => client.generate(prompt).await,
            Self::OpenAi(client) => client.generate(prompt).await,
        }
    }
}
