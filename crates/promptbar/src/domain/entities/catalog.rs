//! PromptCatalog - The ordered collection of prompt templates
//!
//! Owned by the caller. The engine only ever reads a snapshot of it
//! (`templates()`), so the catalog may change freely between calls.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PromptTemplate;
use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptCatalog {
    templates: Vec<PromptTemplate>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-validated templates (e.g. loaded from storage)
    pub fn from_templates(templates: Vec<PromptTemplate>) -> Self {
        Self { templates }
    }

    /// Read-only snapshot in catalog order
    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates filed under `folder_id`, in catalog order
    pub fn in_folder<'a>(
        &'a self,
        folder_id: &'a str,
    ) -> impl Iterator<Item = &'a PromptTemplate> {
        self.templates
            .iter()
            .filter(move |t| t.folder_id.as_deref() == Some(folder_id))
    }

    pub fn get(&self, id: Uuid) -> Option<&PromptTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// First template whose name equals `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&PromptTemplate> {
        let needle = name.to_lowercase();
        self.templates
            .iter()
            .find(|t| t.name.to_lowercase() == needle)
    }

    /// Append a template to the end of the catalog
    pub fn add(&mut self, template: PromptTemplate) -> Result<&PromptTemplate, DomainError> {
        validate(&template)?;
        if self.get(template.id).is_some() {
            return Err(DomainError::Validation(format!(
                "Prompt with id {} already exists",
                template.id
            )));
        }

        tracing::debug!(id = %template.id, name = %template.name, "Prompt added");
        self.templates.push(template);
        let index = self.templates.len() - 1;
        Ok(&self.templates[index])
    }

    /// Replace the template with the same id, keeping its position
    pub fn update(&mut self, template: PromptTemplate) -> Result<&PromptTemplate, DomainError> {
        validate(&template)?;
        let index = self
            .templates
            .iter()
            .position(|t| t.id == template.id)
            .ok_or_else(|| DomainError::not_found("Prompt", template.id))?;

        tracing::debug!(id = %template.id, name = %template.name, "Prompt replaced");
        self.templates[index] = template;
        Ok(&self.templates[index])
    }

    /// Remove a template by id, returning it
    pub fn remove(&mut self, id: Uuid) -> Result<PromptTemplate, DomainError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::debug!(%id, "Prompt removed");
        Ok(self.templates.remove(index))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let catalog: Self = serde_json::from_str(json)?;
        for template in &catalog.templates {
            validate(template)?;
        }
        Ok(catalog)
    }
}

fn validate(template: &PromptTemplate) -> Result<(), DomainError> {
    if template.name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Prompt name must not be empty".to_string(),
        ));
    }
    Ok(())
}
