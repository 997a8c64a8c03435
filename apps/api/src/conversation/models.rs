use serde::{Deserialize, Serialize};

use crate::llm_client::{PromptMessage, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Label used when rendering a transcript line.
    pub fn label(self) -> &'static str {
        match self {
            TurnRole::User => "User",
            TurnRole::Assistant => "Assistant",
        }
    }
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        }
    }
}

/// One chat turn. `content` is always trimmed and non-empty once it has passed
/// through `history::normalize_history` or one of the constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    /// Builds a turn from raw content, or `None` if the content is blank.
    pub fn new(role: TurnRole, content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            role,
            content: content.to_string(),
        })
    }
}

impl From<&Turn> for PromptMessage {
    fn from(turn: &Turn) -> Self {
        PromptMessage {
            role: turn.role.into(),
            content: turn.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_new_trims_content() {
        let turn = Turn::new(TurnRole::User, "  Hello \n").unwrap();
        assert_eq!(turn.content, "Hello");
    }

    #[test]
    fn test_turn_new_rejects_blank() {
        assert!(Turn::new(TurnRole::Assistant, " \t\n").is_none());
    }

    #[test]
    fn test_turn_serializes_ui_shape() {
        let turn = Turn::new(TurnRole::Assistant, "Hi there").unwrap();
        assert_eq!(
            serde_json::to_value(&turn).unwrap(),
            serde_json::json!({"role": "assistant", "content": "Hi there"})
        );
    }

    #[test]
    fn test_turn_maps_to_prompt_message() {
        let turn = Turn::new(TurnRole::User, "Hello").unwrap();
        let message = PromptMessage::from(&turn);
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "Hello");
    }
}
