//! Chat turn flow: normalize history → load document → build prompt → complete.
//!
//! A submit appends the user turn and the assistant turn together, and only after
//! the provider has replied. A failed call leaves the history untouched.

use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::chat::prompts::{COACH_SYSTEM, DOCUMENT_CONTEXT_HEADER};
use crate::conversation::history::normalize_history;
use crate::conversation::models::{Turn, TurnRole};
use crate::document::load_document_context;
use crate::errors::AppError;
use crate::llm_client::prompts::truncate_chars;
use crate::llm_client::{CompletionGateway, LlmError, PromptMessage};

pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const CHAT_MAX_TOKENS: u32 = 600;
/// Max characters of uploaded document text sent with each chat turn.
pub const CHAT_DOCUMENT_CHARS: usize = 6000;

/// Result of a submit: the cleared input box and the history to display.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub message: String,
    pub history: Vec<Turn>,
}

/// Builds persona + optional document context + history + the new user message.
pub fn build_chat_prompt(
    user_message: &str,
    history: &[Turn],
    document_text: &str,
) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(history.len() + 3);
    messages.push(PromptMessage::system(COACH_SYSTEM));

    if !document_text.is_empty() {
        messages.push(PromptMessage::system(format!(
            "{DOCUMENT_CONTEXT_HEADER}{}",
            truncate_chars(document_text, CHAT_DOCUMENT_CHARS)
        )));
    }

    messages.extend(history.iter().map(PromptMessage::from));
    messages.push(PromptMessage::user(user_message));
    messages
}

/// Sends one chat turn to the provider and returns the trimmed reply.
pub async fn persona_chat(
    llm: &dyn CompletionGateway,
    user_message: &str,
    history: &[Turn],
    document_text: &str,
) -> Result<String, LlmError> {
    let messages = build_chat_prompt(user_message, history, document_text);
    let reply = llm
        .complete(&messages, CHAT_TEMPERATURE, CHAT_MAX_TOKENS)
        .await?;

    let reply = reply.trim();
    if reply.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(reply.to_string())
}

/// Handles a chat submit. Blank input is a no-op that issues no request.
pub async fn handle_submit(
    llm: &dyn CompletionGateway,
    user_message: &str,
    raw_history: &[Value],
    upload_path: Option<PathBuf>,
) -> Result<SubmitOutcome, AppError> {
    let mut history = normalize_history(raw_history);

    let Some(user_turn) = Turn::new(TurnRole::User, user_message) else {
        return Ok(SubmitOutcome {
            message: String::new(),
            history,
        });
    };

    let document_text = load_document_context(upload_path).await;

    let reply = persona_chat(llm, &user_turn.content, &history, &document_text)
        .await
        .map_err(|e| AppError::Llm(format!("Chat completion failed: {e}")))?;

    info!(
        "Chat reply received ({} chars, {} prior turns, document context: {})",
        reply.chars().count(),
        history.len(),
        !document_text.is_empty()
    );

    history.push(user_turn);
    history.push(Turn {
        role: TurnRole::Assistant,
        content: reply,
    });

    Ok(SubmitOutcome {
        message: String::new(),
        history,
    })
}
