//! Website generation: turns the conversation into a single-file HTML site.
//!
//! Flow: normalize_history → to_transcript → load document → build prompt →
//!       LLM complete → trim → overwrite the fixed output file.
//!
//! The output is written verbatim. Concurrent generations race on the same file
//! and the last write wins.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::conversation::history::{normalize_history, to_transcript};
use crate::document::load_document_context;
use crate::errors::AppError;
use crate::llm_client::prompts::truncate_chars;
use crate::llm_client::{CompletionGateway, LlmError, PromptMessage};
use crate::website::prompts::{DOCUMENT_LABEL, TRANSCRIPT_LABEL, WEBSITE_SYSTEM};

pub const WEBSITE_TEMPERATURE: f32 = 0.6;
pub const WEBSITE_MAX_TOKENS: u32 = 2200;
/// Max characters of uploaded document text sent for website generation.
pub const WEBSITE_DOCUMENT_CHARS: usize = 8000;

const DOCTYPE_MARKER: &str = "<!doctype html";

/// Builds the generator system prompt and one labelled user message carrying the
/// untruncated transcript and the truncated document text.
pub fn build_website_prompt(transcript: &str, document_text: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(WEBSITE_SYSTEM),
        PromptMessage::user(format!(
            "{TRANSCRIPT_LABEL}\n{transcript}\n\n{DOCUMENT_LABEL}\n{}",
            truncate_chars(document_text, WEBSITE_DOCUMENT_CHARS)
        )),
    ]
}

/// Generates the website and overwrites `output_path` with it. Returns the path.
pub async fn generate_website(
    llm: &dyn CompletionGateway,
    output_path: &Path,
    raw_history: &[Value],
    upload_path: Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    let history = normalize_history(raw_history);
    let transcript = to_transcript(&history);
    let document_text = load_document_context(upload_path).await;

    let messages = build_website_prompt(&transcript, &document_text);

    info!(
        "Generating website from {} turns (document context: {})",
        history.len(),
        !document_text.is_empty()
    );

    let html = llm
        .complete(&messages, WEBSITE_TEMPERATURE, WEBSITE_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Llm(format!("Website generation failed: {e}")))?;

    let html = html.trim();
    if html.is_empty() {
        return Err(AppError::Llm(format!(
            "Website generation failed: {}",
            LlmError::EmptyContent
        )));
    }

    // Not enforced: the model's output is written as-is.
    if !html.to_ascii_lowercase().starts_with(DOCTYPE_MARKER) {
        warn!(
            "Generated website does not start with a doctype: {:?}",
            html.chars().take(60).collect::<String>()
        );
    }

    tokio::fs::write(output_path, html).await?;

    info!(
        "Wrote generated website to {} ({} bytes)",
        output_path.display(),
        html.len()
    );

    Ok(output_path.to_path_buf())
}
