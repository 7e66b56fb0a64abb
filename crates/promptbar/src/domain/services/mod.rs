//! Domain Services
//!
//! Stateless text processing over template content and the input buffer,
//! plus the keystroke reducer that ties them together.
//!
//! Every function here is synchronous and cheap enough to run on each keystroke.

mod driver;
pub mod ranker;
pub mod scanner;
mod session;
pub mod substitution;
pub mod trigger;

pub use driver::*;
pub use ranker::rank;
pub use scanner::{scan, unique_placeholders};
pub use session::*;
pub use substitution::{substitute_trigger, substitute_variables};
pub use trigger::detect;
