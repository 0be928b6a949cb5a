//! Simulation of words against an epsilon-NFA.
//!
//! # Key Concepts
//!
//! - **Closure**: states reachable through epsilon edges alone
//! - **Step**: one literal move from a state set, then closure
//! - **Extended transition**: a left-to-right fold of steps over a word
//! - **Trace**: the same fold exposed lazily, one configuration at a time
//!
//! Everything here is derived from the [`Engine`] trait. [`Automaton`]
//! implements it with an on-demand closure walk; [`ClosureTable`] caches
//! one closure per state up front.
//!
//! [`Automaton`]: crate::core::Automaton

mod engine;
mod table;
mod trace;

pub use engine::Engine;
pub use table::ClosureTable;
pub use trace::{Trace, TraceStep};
