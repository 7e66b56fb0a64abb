//! Trigger Detector
//!
//! A trigger token is `/` followed by a run of ASCII word characters
//! (`[A-Za-z0-9_]`, possibly none) at the very end of the buffer. The cursor
//! is assumed to sit at the end of the buffer.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::value_objects::TriggerState;

pub(crate) static TRIGGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[0-9A-Za-z_]*$").expect("trigger pattern is valid"));

/// Derive the trigger state for the current buffer
pub fn detect(buffer: &str) -> TriggerState {
    match TRIGGER_REGEX.find(buffer) {
        Some(m) => TriggerState::active(&m.as_str()[1..]),
        None => TriggerState::inactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_word_after_slash() {
        assert_eq!(
            detect("Tell me about /weath"),
            TriggerState::active("weath")
        );
    }

    #[test]
    fn test_trailing_space_deactivates() {
        assert_eq!(detect("Tell me about /weath "), TriggerState::inactive());
    }

    #[test]
    fn test_bare_slash_has_empty_filter() {
        let state = detect("/");
        assert!(state.is_active);
        assert_eq!(state.filter_text, "");
        assert!(detect("text /").is_active);
    }

    #[test]
    fn test_non_word_characters_break_the_token() {
        assert!(!detect("/foo-bar").is_active);
        assert!(!detect("/foo.").is_active);
        assert!(!detect("").is_active);
        assert!(!detect("no slash").is_active);
    }

    #[test]
    fn test_only_the_last_slash_counts() {
        assert_eq!(detect("a/b/c_1"), TriggerState::active("c_1"));
        assert_eq!(detect("path/to/file"), TriggerState::active("file"));
    }

    #[test]
    fn test_token_must_be_at_end() {
        assert!(!detect("/weather is nice").is_active);
    }

    #[test]
    fn test_non_ascii_letters_are_not_word_characters() {
        assert!(!detect("/café").is_active);
    }
}
