//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::service::handle_submit;
use crate::conversation::models::Turn;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Raw UI history; malformed entries are dropped, never rejected.
    #[serde(default)]
    pub history: Vec<Value>,
    pub upload_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub history: Vec<Turn>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let upload_path = request
        .upload_id
        .as_deref()
        .and_then(|id| state.uploads.resolve(id));

    let outcome = handle_submit(
        state.llm.as_ref(),
        &request.message,
        &request.history,
        upload_path,
    )
    .await?;

    Ok(Json(ChatResponse {
        message: outcome.message,
        history: outcome.history,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.message.is_empty());
        assert!(request.history.is_empty());
        assert!(request.upload_id.is_none());
    }

    #[test]
    fn test_chat_request_accepts_loose_history() {
        let request: ChatRequest = serde_json::from_value(serde_json::json!({
            "message": "Hello",
            "history": [{"role": "user", "content": "Hi"}, "garbage", 7, null],
            "upload_id": null
        }))
        .unwrap();
        assert_eq!(request.history.len(), 4);
    }
}
