// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Truncates `text` to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_chars("resume", 100), "resume");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_cuts_to_limit() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "ééééé";
        let cut = truncate_chars(text, 2);
        assert_eq!(cut, "éé");
        assert_eq!(cut.chars().count(), 2);
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
