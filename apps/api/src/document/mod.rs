//! Document text extraction for uploaded resume/profile files.
//!
//! Best effort by contract: an unreadable, corrupt, or unsupported upload degrades
//! to empty context and never aborts the conversation.

mod docx;
mod pdf;
mod txt;

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("DOCX extraction failed: {0}")]
    Docx(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::PlainText),
            "md" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Failed to compile BLANK_RUNS regex"));

/// Trims the text and collapses 3+ consecutive newlines to exactly two.
pub fn clean_text(text: &str) -> String {
    BLANK_RUNS.replace_all(text.trim(), "\n\n").into_owned()
}

/// Extracts cleaned plain text from `path`. Any failure yields an empty string.
pub fn extract_text(path: &Path) -> String {
    match try_extract(path) {
        Ok(text) => {
            let text = clean_text(&text);
            debug!("Extracted {} chars from {}", text.chars().count(), path.display());
            text
        }
        Err(e) => {
            warn!("Ignoring uploaded document {}: {e}", path.display());
            String::new()
        }
    }
}

fn try_extract(path: &Path) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        ExtractionError::UnsupportedType(
            path.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;

    match format {
        DocumentFormat::PlainText | DocumentFormat::Markdown => txt::extract_txt(path),
        DocumentFormat::Pdf => pdf::extract_pdf(path),
        DocumentFormat::Docx => docx::extract_docx(path),
    }
}

/// Loads document context for a request, off the async runtime.
/// `None` and every failure, including a panicked worker, yield an empty string.
pub async fn load_document_context(path: Option<PathBuf>) -> String {
    let Some(path) = path else {
        return String::new();
    };

    match tokio::task::spawn_blocking(move || extract_text(&path)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Document extraction task failed: {e}");
            String::new()
        }
    }
}
