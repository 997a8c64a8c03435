// Career-branding chat: persona prompt assembly and the submit flow.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
