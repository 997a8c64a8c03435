use serde_json::Value;

use crate::conversation::models::{Turn, TurnRole};

/// Filters raw UI history records down to valid turns, preserving order.
///
/// A record is kept only if it is a JSON object with `role` equal to `"user"` or
/// `"assistant"` and a string `content` that is non-empty after trimming.
/// Everything else (in-progress placeholders, non-objects, multimodal content)
/// is dropped silently.
pub fn normalize_history(raw: &[Value]) -> Vec<Turn> {
    raw.iter().filter_map(parse_turn).collect()
}

fn parse_turn(record: &Value) -> Option<Turn> {
    let role = match record.get("role")?.as_str()? {
        "user" => TurnRole::User,
        "assistant" => TurnRole::Assistant,
        _ => return None,
    };
    let content = record.get("content")?.as_str()?;
    Turn::new(role, content)
}

/// Renders turns as `User: ...` / `Assistant: ...` lines.
pub fn to_transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.role.label(), t.content))
        .collect::<Vec<_>>()
        .join("\n")
}
