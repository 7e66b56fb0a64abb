//! Substitution Engine
//!
//! Two rewrites: splicing template content over the trailing trigger token,
//! and filling placeholder occurrences with collected values.

use regex::{Captures, NoExpand};

use super::scanner::PLACEHOLDER_REGEX;
use super::trigger::TRIGGER_REGEX;

/// Replace the trailing `/word` token with `content`
///
/// Text before the token is left untouched. A buffer without a trigger
/// token is returned unchanged.
pub fn substitute_trigger(buffer: &str, content: &str) -> String {
    TRIGGER_REGEX
        .replace(buffer, NoExpand(content))
        .into_owned()
}

/// Replace every placeholder occurrence with its collected value
///
/// `names` holds the distinct identifiers in first-occurrence order and
/// `values[i]` is the value for `names[i]`. An identifier missing from
/// `names`, or without a value, becomes an empty string.
pub fn substitute_variables(content: &str, names: &[String], values: &[String]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(content, |caps: &Captures<'_>| {
            let name = &caps[1];
            match names.iter().position(|n| n == name) {
                Some(index) => match values.get(index) {
                    Some(value) => value.clone(),
                    None => {
                        tracing::warn!(variable = name, "No value supplied, substituting empty");
                        String::new()
                    }
                },
                None => {
                    tracing::warn!(variable = name, "Unknown placeholder, substituting empty");
                    String::new()
                }
            }
        })
        .into_owned()
}
