//! Builder API for constructing automata by hand.
//!
//! Front-ends that translate some textual syntax into an automaton use
//! this module directly or reach for the elementary constructors on
//! [`Automaton`] and the combinators in [`crate::combinators`].

mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::ModelError;

use crate::core::{Automaton, StateId, Symbol};

/// Build an automaton from a flat edge list.
///
/// States are created on first mention, `q0` of the list is the initial
/// state when `initial` is `None`, and every id in `accepting` must appear
/// somewhere in the edge list or be the initial state.
///
/// # Example
///
/// ```
/// use thompson::builder::from_edges;
/// use thompson::prelude::*;
///
/// let q = StateId::new;
/// let ab = from_edges(
///     Some(q(0)),
///     [(q(0), Symbol::from('a'), q(1)), (q(1), Symbol::from('b'), q(2))],
///     [q(2)],
/// )
/// .unwrap();
///
/// assert!(ab.accepts("ab"));
/// ```
pub fn from_edges<E, A>(
    initial: Option<StateId>,
    edges: E,
    accepting: A,
) -> Result<Automaton, ModelError>
where
    E: IntoIterator<Item = (StateId, Symbol, StateId)>,
    A: IntoIterator<Item = StateId>,
{
    let mut builder = AutomatonBuilder::new();
    let mut first = initial;

    if let Some(state) = initial {
        builder.add_state(state)?;
    }
    for (from, symbol, to) in edges {
        for state in [from, to] {
            if !builder.states().contains(&state) {
                builder.add_state(state)?;
            }
        }
        first.get_or_insert(from);
        builder.add_transition(from, symbol, [to])?;
    }

    builder.set_initial(first.ok_or(ModelError::MissingInitialState)?)?;
    for state in accepting {
        builder.add_accepting(state)?;
    }
    builder.build()
}
