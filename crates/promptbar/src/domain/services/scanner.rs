//! Placeholder Scanner
//!
//! Finds `{{identifier}}` spans in template content. The match is
//! non-greedy, so `{{a}}{{b}}` yields two placeholders. There is no escape
//! syntax for literal double braces, and an unterminated `{{` simply does
//! not match.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

/// Placeholder identifiers in document order, duplicates included
pub fn scan(content: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Placeholder identifiers collapsed to first-occurrence order
///
/// This is the order in which a value-collection form asks for values.
pub fn unique_placeholders(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan(content)
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
