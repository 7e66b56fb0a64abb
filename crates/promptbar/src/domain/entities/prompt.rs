//! Prompt - Prompt Templates
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::scanner;

/// PromptTemplate - A named prompt template
///
/// `content` may contain any number of `{{identifier}}` placeholders.
/// Templates are never edited in place; an update replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    /// Folder the prompt is filed under, if any
    #[serde(default, rename = "folderId")]
    pub folder_id: Option<String>,
    /// Model settings attached to the prompt, kept as stored
    #[serde(default)]
    pub model: Option<serde_json::Value>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content: content.into(),
            description: description.into(),
            folder_id: None,
            model: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// File the template under a folder
    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Create an empty template with a fresh id, the starting point of a
    /// "new prompt" form
    pub fn new_blank() -> Self {
        Self::new("", "", "")
    }

    /// Build the replacement value for this template, keeping its identity
    pub fn replaced_with(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            content: content.into(),
            description: description.into(),
            folder_id: self.folder_id.clone(),
            model: self.model.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Distinct placeholder names in first-occurrence order
    pub fn variables(&self) -> Vec<String> {
        scanner::unique_placeholders(&self.content)
    }

    /// Whether selecting this template needs a value-collection step
    pub fn has_variables(&self) -> bool {
        !scanner::scan(&self.content).is_empty()
    }
}
