/// Represents the provider (backend) used for text generation.
///
/// The chat endpoint only ever talks to one provider per process; which one
/// is selected by `LLM_KIND` at startup. Adding more providers in the future
/// (e.g., Anthropic Claude, Mistral API) can be done by extending this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Gemini API (`generateContent`). The default.
    Gemini,
    /// OpenAI's chat completions API.
    OpenAI,
}
