//! JSON file store for the prompt catalog
//!
//! The whole catalog is written as one pretty-printed JSON array after
//! every change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use promptbar::{DomainError, PromptCatalog, PromptRepository};

pub struct JsonPromptStore {
    path: PathBuf,
}

impl JsonPromptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PromptRepository for JsonPromptStore {
    fn load(&self) -> Result<PromptCatalog, DomainError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No prompt file yet");
                return Ok(PromptCatalog::new());
            }
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(PromptCatalog::new());
        }

        let catalog = PromptCatalog::from_json(&content)?;
        tracing::debug!(count = catalog.len(), "Prompts loaded");
        Ok(catalog)
    }

    fn save(&self, catalog: &PromptCatalog) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::Repository(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        fs::write(&self.path, catalog.to_json()?).map_err(|e| {
            DomainError::Repository(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(count = catalog.len(), path = %self.path.display(), "Prompts saved");
        Ok(())
    }
}
