// Personal website generation from the conversation and the uploaded profile.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
