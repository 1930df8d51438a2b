use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chatbot`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's question. Required; an absent or blank question is a 400.
    #[serde(default)]
    pub question: Option<String>,

    /// Prior conversation, already flattened to plain text by the caller.
    /// The server keeps no chat state of its own.
    #[serde(default)]
    pub history: Option<String>,
}

/// Response body for `POST /api/chatbot`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The generated text, verbatim from the upstream model.
    pub answer: String,
}
