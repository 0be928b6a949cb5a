//! Structural composition of automata.
//!
//! Each combinator takes finished automata by reference and returns a new
//! one; inputs are never modified. Internally every input is copied into a
//! state arena block of its own, so state ids of the result are
//! dense, start at zero, and never collide however deeply combinators are
//! nested.
//!
//! # Example
//!
//! ```rust
//! use thompson::combinators::{concat, star, union};
//! use thompson::prelude::*;
//!
//! // (a|b)*c
//! let a_or_b = union(&Automaton::symbol('a'), &Automaton::symbol('b'));
//! let expr = concat(&star(&a_or_b), &Automaton::symbol('c'));
//!
//! assert!(expr.accepts("c"));
//! assert!(expr.accepts("abbac"));
//! assert!(!expr.accepts("ab"));
//! ```

pub(crate) mod arena;
mod thompson;

pub use thompson::{concat, concat_all, optional, plus, star, union, union_all};
