// Conversation model shared by the chat and website flows.
// `history` is the only ingress from loosely-typed UI state into typed turns.

pub mod history;
pub mod models;
