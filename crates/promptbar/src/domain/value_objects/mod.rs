//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod trigger_state;

pub use trigger_state::*;
