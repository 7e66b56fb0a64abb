//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the engine interacts with the
//! surrounding UI layer (forms) and with storage.
//!
//! Implementations of these traits live in the front end (e.g. promptbar-cli).

mod collaborators;
mod repository;

// Re-exports
pub use collaborators::*;
pub use repository::*;
