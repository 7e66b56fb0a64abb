//! Promptbar Domain Library
//!
//! Prompt template engine behind a slash-command prompt picker.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure text processing and entities
//!   - `entities/`: PromptTemplate, PromptCatalog, Candidate
//!   - `value_objects/`: TriggerState
//!   - `services/`: scanner, trigger detector, ranker, substitution, session reducer
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) for the surrounding UI
//!   - `repository.rs`: Catalog persistence
//!   - `collaborators.rs`: Value-collection and template-creation forms
//!
//! # Usage
//!
//! ```
//! use promptbar::{detect, rank, scan, substitute_variables, PromptTemplate};
//!
//! let templates = vec![PromptTemplate::new("weather", "Forecast for {{city}}", "")];
//!
//! let trigger = detect("Tell me /wea");
//! assert!(trigger.is_active);
//!
//! let candidates = rank(&templates, &trigger.filter_text);
//! assert_eq!(candidates.len(), 2);
//!
//! let names = scan(&templates[0].content);
//! let filled = substitute_variables(&templates[0].content, &names, &["Oslo".to_string()]);
//! assert_eq!(filled, "Forecast for Oslo");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    detect, rank, scan, substitute_trigger, substitute_variables, unique_placeholders, Candidate,
    DomainError, PromptCatalog, PromptDriver, PromptSession, PromptTemplate, SessionEffect,
    SessionEvent, SessionPhase, TriggerState,
};
pub use ports::{PromptRepository, TemplateCreator, VariableCollector};
