//! Window assignment: decides which live window each saved target moves.
//!
//! Window enumeration carries no identity that survives a session, so the
//! index saved with a target is only a hint. [`assign`] tries hints first and
//! falls back to enumeration order, never handing the same window out twice.

mod engine;
mod types;


pub use engine::assign;
pub use types::*;
