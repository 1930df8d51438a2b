pub mod chatbot;
pub mod parties_route;
pub mod party_route;
pub mod politician_route;
