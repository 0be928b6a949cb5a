//! Core automaton types.
//!
//! This module contains the pure data model of the engine:
//! - Transition labels via the `Symbol` enum
//! - State identifiers and ordered state sets
//! - The immutable `Automaton` with its read-only surface
//!
//! Nothing in this module mutates a finished automaton; construction goes
//! through [`crate::builder::AutomatonBuilder`].

mod model;
mod record;
mod state;
mod symbol;

pub use model::{Automaton, Transitions};
pub use state::{state_set, StateId, StateSet};
pub use symbol::Symbol;
