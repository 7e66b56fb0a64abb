//! Candidate Ranker
//!
//! Case-insensitive substring filter on template names. Catalog order is
//! kept among the matches, and the "create new" entry always comes last.

use crate::domain::entities::{Candidate, PromptTemplate};

/// Filter `templates` by `filter_text` and append the "create new" entry
pub fn rank(templates: &[PromptTemplate], filter_text: &str) -> Vec<Candidate> {
    let needle = filter_text.to_lowercase();
    let mut candidates: Vec<Candidate> = templates
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .cloned()
        .map(Candidate::Real)
        .collect();
    candidates.push(Candidate::CreateNew);

    tracing::debug!(
        filter = filter_text,
        matches = candidates.len() - 1,
        "Ranked prompt candidates"
    );
    candidates
}
