//! Candidate - Entries of the ranked prompt picker

use serde::{Deserialize, Serialize};

use super::PromptTemplate;

/// Label shown for the trailing "create new" entry
pub const CREATE_NEW_LABEL: &str = "+ New Prompt";

/// One row of the candidate list
///
/// The "create new" entry is its own variant, so it can never be stored in a
/// catalog or have placeholders substituted against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    Real(PromptTemplate),
    CreateNew,
}

impl Candidate {
    /// Display label for the picker
    pub fn label(&self) -> &str {
        match self {
            Self::Real(template) => &template.name,
            Self::CreateNew => CREATE_NEW_LABEL,
        }
    }

    pub fn template(&self) -> Option<&PromptTemplate> {
        match self {
            Self::Real(template) => Some(template),
            Self::CreateNew => None,
        }
    }

    pub fn is_create_new(&self) -> bool {
        matches!(self, Self::CreateNew)
    }
}
