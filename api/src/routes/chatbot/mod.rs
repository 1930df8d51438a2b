pub mod chat_request;
pub mod chatbot_route;
pub mod prompt;
