//! Prompt builder: fixed instruction + catalog context + history + question.

/// Instruction framing the assistant and pinning it to the supplied context.
///
/// The fallback phrase is part of the product contract; the frontend
/// recognizes it verbatim.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful political assistant for an app called VoteWise. \
Answer the user's question based ONLY on the following context. \
If the answer isn't in the context, say \"I don't have that specific information.\"";

/// Assembles the single prompt string sent upstream.
///
/// Section order is fixed: instruction, serialized catalog, caller-supplied
/// history, question. History and question are included raw; an absent
/// history arrives here as an empty string and leaves its section empty.
pub fn build_prompt(context_json: &str, history: &str, question: &str) -> String {
    format!(
        "{SYSTEM_INSTRUCTION}\n\nCONTEXT:\n{context_json}\n\nCONVERSATION HISTORY:\n{history}\n\nUSER QUESTION:\n{question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_appear_in_order() {
        let prompt = build_prompt("{\"parties\":[]}", "User: hi", "Who rules?");

        let instruction = prompt.find("helpful political assistant").unwrap();
        let context = prompt.find("CONTEXT:\n{\"parties\":[]}").unwrap();
        let history = prompt.find("CONVERSATION HISTORY:\nUser: hi").unwrap();
        let question = prompt.find("USER QUESTION:\nWho rules?").unwrap();

        assert!(instruction < context);
        assert!(context < history);
        assert!(history < question);
    }

    #[test]
    fn absent_history_leaves_an_empty_section() {
        let prompt = build_prompt("{}", "", "q");
        assert!(prompt.contains("CONVERSATION HISTORY:\n\nUSER QUESTION:\nq"));
    }

    #[test]
    fn instruction_carries_the_fallback_phrase() {
        assert!(SYSTEM_INSTRUCTION.contains("I don't have that specific information."));
    }
}
