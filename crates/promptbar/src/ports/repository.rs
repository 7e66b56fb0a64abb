//! Prompt Repository Port
//!
//! Abstract interface for catalog persistence. The whole catalog is loaded
//! and saved at once, in catalog order.

use crate::domain::{errors::DomainError, PromptCatalog};

/// Repository interface for the prompt catalog
pub trait PromptRepository {
    /// Load the catalog; a store that does not exist yet yields an empty catalog
    fn load(&self) -> Result<PromptCatalog, DomainError>;

    /// Persist the full catalog, replacing what was stored
    fn save(&self, catalog: &PromptCatalog) -> Result<(), DomainError>;
}
