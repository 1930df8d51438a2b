//! Client for the external text-generation API behind the chat endpoint.
//!
//! The rest of the application treats the upstream as an opaque
//! `generate(prompt) -> String` call; this crate supplies that call. It
//! resolves a provider configuration from the environment once at startup
//! (missing credentials are a startup failure, not a request failure),
//! holds one preconfigured HTTP client per provider, and normalizes every
//! upstream problem into [`error_handler::AiLlmError`].
//!
//! Providers: Google Gemini (default) and OpenAI. One awaited request per
//! call, no streaming, no retries.

pub mod config;
pub mod error_handler;
pub mod services;

mod generator;

pub use generator::{LlmService, TextGenerator};
