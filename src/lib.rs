//! Thompson: an epsilon-NFA engine with structural combinators
//!
//! The crate stores nondeterministic finite automata with epsilon moves,
//! answers membership queries against them, and composes them with the
//! classic Thompson constructions. Finished automata are immutable values;
//! every combinator returns a fresh automaton and leaves its inputs alone.
//!
//! # Core Concepts
//!
//! - **Automaton**: states, alphabet, initial state, accepting set and a
//!   set-valued transition relation, built with `AutomatonBuilder`
//! - **Engine**: epsilon-closure, stepping, word folding and lazy traces
//! - **Combinators**: union, concatenation and Kleene star over disjoint
//!   copies of their inputs
//!
//! # Example
//!
//! ```rust
//! use thompson::prelude::*;
//!
//! let a = Automaton::symbol('a');
//! let b = Automaton::symbol('b');
//!
//! // (a|b)*b
//! let ends_in_b = a.union(&b).star().concat(&b);
//!
//! assert!(ends_in_b.accepts("b"));
//! assert!(ends_in_b.accepts("aab"));
//! assert!(!ends_in_b.accepts("aba"));
//!
//! for step in ends_in_b.trace("ab") {
//!     println!("{:?} -> {:?} (rest {:?})", step.consumed, step.active, step.remaining);
//! }
//! ```

pub mod analysis;
pub mod builder;
pub mod combinators;
pub mod core;
pub mod simulation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, ModelError};
pub use core::{Automaton, StateId, StateSet, Symbol};
pub use simulation::{ClosureTable, Engine, Trace, TraceStep};

/// Everything needed to build and query automata.
pub mod prelude {
    pub use crate::builder::{AutomatonBuilder, ModelError};
    pub use crate::core::{Automaton, StateId, StateSet, Symbol};
    pub use crate::simulation::{ClosureTable, Engine, Trace, TraceStep};
}
