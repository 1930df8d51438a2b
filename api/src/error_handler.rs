use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ai_llm_service::error_handler::AiLlmError;
use catalog::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
///
/// Request-time variants map onto the API's fixed error bodies; boot
/// variants only ever surface as an error return from `main`.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("LLM configuration error")]
    LlmConfig(#[source] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("party not found")]
    PartyNotFound,

    #[error("politician not found")]
    PoliticianNotFound,

    #[error("no question provided")]
    MissingQuestion,

    /// The upstream generation call failed; details are logged server-side
    /// and the client only sees the generic body.
    #[error("upstream generation failed")]
    Upstream(#[source] AiLlmError),

    /// The catalog failed to serialize for the prompt context. Cannot
    /// happen with the embedded data.
    #[error("failed to serialize catalog context")]
    ContextSerialization(#[from] serde_json::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::PartyNotFound | AppError::PoliticianNotFound => StatusCode::NOT_FOUND,
            AppError::MissingQuestion => StatusCode::BAD_REQUEST,

            // 5xx
            AppError::Upstream(_) | AppError::ContextSerialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // startup-only; never reaches a response
            AppError::Catalog(_)
            | AppError::LlmConfig(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The exact client-facing error string; these are part of the API
    /// contract and must not leak internal detail.
    fn client_message(&self) -> &'static str {
        match self {
            AppError::PartyNotFound => "Party not found",
            AppError::PoliticianNotFound => "Politician not found",
            AppError::MissingQuestion => "No question provided.",
            AppError::Upstream(_) => "Failed to get a response from the AI.",
            AppError::ContextSerialization(_)
            | AppError::Catalog(_)
            | AppError::LlmConfig(_)
            | AppError::Bind(_)
            | AppError::Server(_) => "Internal server error",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
