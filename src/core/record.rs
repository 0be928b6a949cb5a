//! Serialized form of an automaton and its validation.
//!
//! Deserialized input is untrusted, so it goes through the same invariant
//! checks as the builder. Unlike the builder, which stops at the first bad
//! call, validation here collects every violation in one pass using
//! Stillwater's `Validation`.

use super::model::{Automaton, Transitions};
use super::state::{StateId, StateSet};
use super::symbol::Symbol;
use crate::builder::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ModelError>>;

/// One `(from, symbol) -> targets` entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct TransitionRecord {
    from: StateId,
    symbol: Symbol,
    to: Vec<StateId>,
}

/// Flat, map-key-free layout so any serde format can carry it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct AutomatonRecord {
    states: Vec<StateId>,
    #[serde(default)]
    alphabet: Vec<char>,
    initial: StateId,
    #[serde(default)]
    accepting: Vec<StateId>,
    #[serde(default)]
    transitions: Vec<TransitionRecord>,
}

impl From<Automaton> for AutomatonRecord {
    fn from(automaton: Automaton) -> Self {
        let transitions = automaton
            .delta
            .iter()
            .flat_map(|(&from, edges)| {
                edges.iter().map(move |(&symbol, targets)| TransitionRecord {
                    from,
                    symbol,
                    to: targets.iter().copied().collect(),
                })
            })
            .collect();

        Self {
            states: automaton.states.into_iter().collect(),
            alphabet: automaton.alphabet.into_iter().collect(),
            initial: automaton.initial,
            accepting: automaton.accepting.into_iter().collect(),
            transitions,
        }
    }
}

impl TryFrom<AutomatonRecord> for Automaton {
    type Error = ModelError;

    fn try_from(record: AutomatonRecord) -> Result<Self, Self::Error> {
        let mut states = StateSet::new();
        let mut checks: Vec<Check> = Vec::new();

        for &state in &record.states {
            checks.push(if states.insert(state) {
                Validation::success(())
            } else {
                Validation::fail(ModelError::DuplicateState(state))
            });
        }

        checks.push(require_state(&states, record.initial));
        for &state in &record.accepting {
            checks.push(require_state(&states, state));
        }
        for transition in &record.transitions {
            checks.push(require_state(&states, transition.from));
            for &target in &transition.to {
                checks.push(require_state(&states, target));
            }
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(assemble(record, states)),
            Validation::Failure(errors) => {
                Err(ModelError::InvalidAutomaton(errors.iter().cloned().collect()))
            }
        }
    }
}

fn require_state(states: &StateSet, state: StateId) -> Check {
    if states.contains(&state) {
        Validation::success(())
    } else {
        Validation::fail(ModelError::StateNotFound(state))
    }
}

fn assemble(record: AutomatonRecord, states: StateSet) -> Automaton {
    let mut alphabet: BTreeSet<char> = record.alphabet.into_iter().collect();
    let mut delta: BTreeMap<StateId, Transitions> = BTreeMap::new();

    for transition in record.transitions {
        if transition.to.is_empty() {
            continue;
        }
        if let Symbol::Literal(c) = transition.symbol {
            alphabet.insert(c);
        }
        delta
            .entry(transition.from)
            .or_default()
            .entry(transition.symbol)
            .or_default()
            .extend(transition.to);
    }

    Automaton {
        states,
        alphabet,
        initial: record.initial,
        accepting: record.accepting.into_iter().collect(),
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state_set;

    #[test]
    fn automaton_serializes_correctly() {
        let automaton = Automaton::word("ab");

        let json = serde_json::to_string(&automaton).unwrap();
        let deserialized: Automaton = serde_json::from_str(&json).unwrap();

        assert_eq!(automaton, deserialized);
    }

    #[test]
    fn deserialization_infers_alphabet_from_edges() {
        let json = r#"{
            "states": [0, 1],
            "initial": 0,
            "accepting": [1],
            "transitions": [{"from": 0, "symbol": {"Literal": "x"}, "to": [1]}]
        }"#;

        let automaton: Automaton = serde_json::from_str(json).unwrap();

        assert_eq!(automaton.alphabet(), &BTreeSet::from(['x']));
        assert_eq!(automaton.accepting_states(), &state_set([1]));
    }

    #[test]
    fn deserialization_accumulates_all_violations() {
        let record = AutomatonRecord {
            states: vec![StateId::new(0), StateId::new(0)],
            alphabet: Vec::new(),
            initial: StateId::new(9),
            accepting: vec![StateId::new(8)],
            transitions: vec![TransitionRecord {
                from: StateId::new(0),
                symbol: Symbol::Epsilon,
                to: vec![StateId::new(7)],
            }],
        };

        let result = Automaton::try_from(record);

        match result {
            Err(ModelError::InvalidAutomaton(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.contains(&ModelError::DuplicateState(StateId::new(0))));
                assert!(errors.contains(&ModelError::StateNotFound(StateId::new(9))));
                assert!(errors.contains(&ModelError::StateNotFound(StateId::new(8))));
                assert!(errors.contains(&ModelError::StateNotFound(StateId::new(7))));
            }
            other => panic!("Expected accumulated violations, got {other:?}"),
        }
    }

    #[test]
    fn empty_target_lists_are_dropped() {
        let json = r#"{
            "states": [0],
            "initial": 0,
            "transitions": [{"from": 0, "symbol": {"Literal": "z"}, "to": []}]
        }"#;

        let automaton: Automaton = serde_json::from_str(json).unwrap();

        assert_eq!(automaton, Automaton::empty());
        assert!(automaton.alphabet().is_empty());
        assert!(automaton.transitions_from(StateId::new(0)).is_empty());
    }

    #[test]
    fn deserialization_rejects_dangling_target() {
        let json = r#"{
            "states": [0],
            "initial": 0,
            "transitions": [{"from": 0, "symbol": "Epsilon", "to": [3]}]
        }"#;

        let result: Result<Automaton, _> = serde_json::from_str(json);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("q3"));
    }
}
