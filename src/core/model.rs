//! The finished, immutable epsilon-NFA.

use super::record::AutomatonRecord;
use super::state::{StateId, StateSet};
use super::symbol::Symbol;
use crate::builder::AutomatonBuilder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Outgoing edges of one state, keyed by label.
pub type Transitions = BTreeMap<Symbol, StateSet>;

static NO_TRANSITIONS: Transitions = BTreeMap::new();
static NO_STATES: StateSet = BTreeSet::new();

/// A nondeterministic finite automaton with epsilon moves.
///
/// An `Automaton` always satisfies its structural invariants:
///
/// - it has at least one state and the initial state is one of them
/// - every accepting state is a state
/// - every transition source and target is a state
/// - the alphabet contains every literal used on an edge
///
/// Values are produced by [`AutomatonBuilder::build`], by the elementary
/// constructors below, or by the combinators. None of the query or
/// combinator operations mutate an automaton.
///
/// # Example
///
/// ```rust
/// use thompson::prelude::*;
///
/// let a = Automaton::symbol('a');
/// assert_eq!(a.num_states(), 2);
/// assert!(a.accepts("a"));
/// assert!(!a.accepts(""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AutomatonRecord", try_from = "AutomatonRecord")]
pub struct Automaton {
    pub(crate) states: StateSet,
    pub(crate) alphabet: BTreeSet<char>,
    pub(crate) initial: StateId,
    pub(crate) accepting: StateSet,
    pub(crate) delta: BTreeMap<StateId, Transitions>,
}

impl Automaton {
    /// Automaton accepting exactly the one-character word `c`.
    ///
    /// States `q0 -c-> q1`, with `q1` accepting.
    pub fn symbol(c: char) -> Self {
        Self::word(&c.to_string())
    }

    /// Automaton accepting exactly the empty word.
    pub fn epsilon() -> Self {
        let start = StateId::new(0);
        Self {
            states: StateSet::from([start]),
            alphabet: BTreeSet::new(),
            initial: start,
            accepting: StateSet::from([start]),
            delta: BTreeMap::new(),
        }
    }

    /// Automaton accepting nothing at all.
    pub fn empty() -> Self {
        Self {
            accepting: StateSet::new(),
            ..Self::epsilon()
        }
    }

    /// Automaton accepting exactly `word`, one state per prefix.
    ///
    /// `word("")` is equivalent to [`Automaton::epsilon`]. State ids are
    /// `u32`, so only the first `u32::MAX` characters are used.
    pub fn word(word: &str) -> Self {
        let mut automaton = Self::epsilon();
        let mut last = automaton.initial;
        for (index, c) in (1..=u32::MAX).zip(word.chars()) {
            let next = StateId::new(index);
            automaton.states.insert(next);
            automaton.alphabet.insert(c);
            automaton
                .delta
                .entry(last)
                .or_default()
                .insert(Symbol::Literal(c), StateSet::from([next]));
            last = next;
        }
        automaton.accepting = StateSet::from([last]);
        automaton
    }

    /// Reopen this automaton for further construction.
    pub fn into_builder(self) -> AutomatonBuilder {
        AutomatonBuilder::from_automaton(self)
    }

    /// Copy this automaton into a new builder.
    pub fn to_builder(&self) -> AutomatonBuilder {
        self.clone().into_builder()
    }

    /// All states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Check if `state` belongs to this automaton.
    pub fn contains_state(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// The initial state.
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// The accepting states.
    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Check if `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The input alphabet, never including epsilon.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Outgoing edges of `state`, empty for unknown or edgeless states.
    pub fn transitions_from(&self, state: StateId) -> &Transitions {
        self.delta.get(&state).unwrap_or(&NO_TRANSITIONS)
    }

    /// Targets of `state` on `symbol`.
    ///
    /// A missing entry is not an error; it reads as the empty set.
    pub fn targets(&self, state: StateId, symbol: Symbol) -> &StateSet {
        self.delta
            .get(&state)
            .and_then(|edges| edges.get(&symbol))
            .unwrap_or(&NO_STATES)
    }

    /// Every edge as `(source, label, target)`, in source order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.delta.iter().flat_map(|(&from, edges)| {
            edges
                .iter()
                .flat_map(move |(&symbol, targets)| targets.iter().map(move |&to| (from, symbol, to)))
        })
    }

    /// Number of individual edges.
    pub fn num_transitions(&self) -> usize {
        self.delta
            .values()
            .flat_map(|edges| edges.values())
            .map(StateSet::len)
            .sum()
    }

    /// Largest state index in use.
    pub(crate) fn max_index(&self) -> u32 {
        self.states
            .last()
            .map(StateId::index)
            .unwrap_or_default()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &StateSet| {
            set.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let alphabet: Vec<String> = self.alphabet.iter().map(char::to_string).collect();

        writeln!(f, "States   : {}", join(&self.states))?;
        writeln!(f, "Alphabet : {}", alphabet.join(", "))?;
        writeln!(f, "Initial  : {}", self.initial)?;
        writeln!(f, "Accepting: {}", join(&self.accepting))?;
        write!(f, "Transitions:")?;
        for (from, edges) in &self.delta {
            for (symbol, targets) in edges {
                write!(f, "\n {from},{symbol} → {{{}}}", join(targets))?;
            }
        }
        Ok(())
    }
}
