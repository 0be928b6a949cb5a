//! Construction errors for automata.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while constructing or loading an automaton.
///
/// These are raised only by the builder and by deserialization. Query
/// operations and combinators work on finished automata and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("State {0} already exists")]
    DuplicateState(StateId),

    #[error("State {0} does not exist. Call .add_state({0}) first")]
    StateNotFound(StateId),

    #[error("Symbol '{0}' is not part of the declared alphabet")]
    InvalidSymbol(char),

    #[error("Initial state not specified. Call .set_initial(state) before .build()")]
    MissingInitialState,

    #[error("Every state id is already in use")]
    StateSpaceExhausted,

    #[error("Invalid automaton: {}", describe(.0))]
    InvalidAutomaton(Vec<ModelError>),
}

fn describe(violations: &[ModelError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_state() {
        let error = ModelError::StateNotFound(StateId::new(4));
        assert!(error.to_string().contains("q4"));
    }

    #[test]
    fn invalid_automaton_lists_every_violation() {
        let error = ModelError::InvalidAutomaton(vec![
            ModelError::DuplicateState(StateId::new(1)),
            ModelError::StateNotFound(StateId::new(2)),
        ]);

        let message = error.to_string();
        assert!(message.contains("State q1 already exists"));
        assert!(message.contains("State q2 does not exist"));
    }
}
