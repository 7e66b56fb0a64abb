//! Collaborator Ports
//!
//! Forms the engine asks the UI layer to open. Both are synchronous: the
//! engine has no suspension points, so a form returns only when the user
//! has answered or dismissed it.

use crate::domain::entities::PromptTemplate;

/// Multi-field form collecting one value per placeholder
pub trait VariableCollector {
    /// Ask for values for `variables` (distinct names, first-occurrence order)
    ///
    /// Returns the values in the same order, or `None` if the user cancelled.
    fn collect(&self, template: &PromptTemplate, variables: &[String]) -> Option<Vec<String>>;
}

/// Full "create prompt" form, opened from the "create new" entry
pub trait TemplateCreator {
    /// Returns the new template, or `None` if the user cancelled
    fn create(&self) -> Option<PromptTemplate>;
}
