//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptTemplate: A named template with `{{placeholder}}` markup
//! - PromptCatalog: The caller-owned, ordered collection of templates
//! - Candidate: An entry of the ranked picker list (real template or "create new")

mod candidate;
mod catalog;
mod prompt;

pub use candidate::*;
pub use catalog::*;
pub use prompt::*;
