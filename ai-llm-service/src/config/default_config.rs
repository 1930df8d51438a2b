//! LLM configs loaded strictly from environment variables.
//!
//! This module resolves the single generate-profile config used by the chat
//! endpoint. The provider is picked by `LLM_KIND`; each provider then reads
//! its own credential/model/endpoint variables. A missing credential is a
//! config error, which the binary treats as fatal at startup.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND` = provider kind (`gemini`, default; or `openai`)
//! - `LLM_MAX_TOKENS` = optional max output tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout in seconds (u64)
//!
//! Gemini-specific:
//! - `GEMINI_API_KEY` = API key (mandatory)
//! - `GEMINI_MODEL`   = model id (default `gemini-1.5-flash-latest`)
//! - `GEMINI_URL`     = API base (default `https://generativelanguage.googleapis.com`)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY` = API key (mandatory)
//! - `OPENAI_MODEL`   = model id (default `gpt-4o-mini`)
//! - `OPENAI_URL`     = API base (default `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ConfigError, env_opt_u32, env_opt_u64, must_env},
};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Parses an `LLM_KIND`-style provider name.
///
/// Accepts `gemini`, `openai`, and `chatgpt` (alias), case-insensitively.
///
/// # Errors
/// [`ConfigError::UnsupportedProvider`] for anything else.
pub fn parse_provider(kind: &str) -> Result<LlmProvider, AiLlmError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "gemini" => Ok(LlmProvider::Gemini),
        "openai" | "chatgpt" => Ok(LlmProvider::OpenAI),
        other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    }
}

/// Resolves the generate-profile config from the environment.
///
/// `LLM_KIND` selects the provider (default `gemini`), then the provider's
/// own variables are read.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_KIND`
/// - [`ConfigError::MissingVar`] if the selected provider's API key is absent
/// - [`ConfigError::InvalidNumber`] for malformed numeric variables
pub fn config_from_env() -> Result<LlmModelConfig, AiLlmError> {
    let kind = std::env::var("LLM_KIND").unwrap_or_else(|_| "gemini".into());
    match parse_provider(&kind)? {
        LlmProvider::Gemini => config_gemini(),
        LlmProvider::OpenAI => config_openai(),
    }
}

/// Constructs the **Gemini** config.
///
/// # Env
/// - `GEMINI_API_KEY` (required)
/// - `GEMINI_MODEL`, `GEMINI_URL`, `LLM_MAX_TOKENS`, `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `timeout_secs = Some(60)`, sampling knobs unset (provider defaults)
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GEMINI_API_KEY")?;
    let model = env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let endpoint = env_or("GEMINI_URL", DEFAULT_GEMINI_URL);
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: None,
        top_p: None,
        timeout_secs,
    })
}

/// Constructs the **OpenAI** config.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL`, `OPENAI_URL`, `LLM_MAX_TOKENS`, `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `timeout_secs = Some(60)`, sampling knobs unset (provider defaults)
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL);
    let endpoint = env_or("OPENAI_URL", DEFAULT_OPENAI_URL);
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: None,
        top_p: None,
        timeout_secs,
    })
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_parse() {
        assert_eq!(parse_provider("gemini").unwrap(), LlmProvider::Gemini);
        assert_eq!(parse_provider("GEMINI").unwrap(), LlmProvider::Gemini);
        assert_eq!(parse_provider("openai").unwrap(), LlmProvider::OpenAI);
        assert_eq!(parse_provider("chatgpt").unwrap(), LlmProvider::OpenAI);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = parse_provider("llamafile").unwrap_err();
        assert!(err.to_string().contains("unsupported provider"));
    }
}
