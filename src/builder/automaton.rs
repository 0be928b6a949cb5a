//! Builder for constructing automata by hand.

use crate::builder::error::ModelError;
use crate::core::{Automaton, StateId, StateSet, Symbol, Transitions};
use std::collections::{BTreeMap, BTreeSet};

/// Mutable construction phase of an [`Automaton`].
///
/// Every mutator validates its arguments against the states added so far
/// and leaves the builder untouched when it fails, so the finished
/// automaton can never hold a dangling reference.
///
/// # Example
///
/// ```rust
/// use thompson::prelude::*;
///
/// # fn main() -> Result<(), ModelError> {
/// let mut builder = AutomatonBuilder::new();
/// let (q0, q1) = (StateId::new(0), StateId::new(1));
/// builder.add_state(q0)?;
/// builder.add_state(q1)?;
/// builder.set_initial(q0)?;
/// builder.add_accepting(q1)?;
/// builder.add_transition(q0, 'a', [q1])?;
/// builder.add_transition(q1, Symbol::Epsilon, [q0])?;
///
/// let automaton = builder.build()?;
/// assert!(automaton.accepts("aaa"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: StateSet,
    alphabet: BTreeSet<char>,
    closed_alphabet: bool,
    initial: Option<StateId>,
    accepting: StateSet,
    delta: BTreeMap<StateId, Transitions>,
}

impl AutomatonBuilder {
    /// Create an empty builder with an open alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder whose alphabet is closed to `symbols`.
    ///
    /// Literal transitions on any other character fail with
    /// [`ModelError::InvalidSymbol`]. Epsilon edges are always allowed.
    pub fn with_alphabet<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            alphabet: symbols.into_iter().collect(),
            closed_alphabet: true,
            ..Self::default()
        }
    }

    pub(crate) fn from_automaton(automaton: Automaton) -> Self {
        Self {
            states: automaton.states,
            alphabet: automaton.alphabet,
            closed_alphabet: false,
            initial: Some(automaton.initial),
            accepting: automaton.accepting,
            delta: automaton.delta,
        }
    }

    /// Add `c` to the alphabet without adding a transition.
    pub fn declare_symbol(&mut self, c: char) {
        self.alphabet.insert(c);
    }

    /// Add a state.
    pub fn add_state(&mut self, state: StateId) -> Result<(), ModelError> {
        if !self.states.insert(state) {
            return Err(ModelError::DuplicateState(state));
        }
        Ok(())
    }

    /// Add a state under the smallest unused id not below the state count,
    /// wrapping around to the low ids once the top of the range is taken.
    pub fn add_next_state(&mut self) -> Result<StateId, ModelError> {
        let start = u32::try_from(self.states.len()).unwrap_or(u32::MAX);
        let state = (start..=u32::MAX)
            .chain(0..start)
            .map(StateId::new)
            .find(|state| !self.states.contains(state))
            .ok_or(ModelError::StateSpaceExhausted)?;

        self.states.insert(state);
        Ok(state)
    }

    /// Set the initial state, replacing any previous choice.
    pub fn set_initial(&mut self, state: StateId) -> Result<(), ModelError> {
        self.require_state(state)?;
        self.initial = Some(state);
        Ok(())
    }

    /// Mark a state as accepting.
    pub fn add_accepting(&mut self, state: StateId) -> Result<(), ModelError> {
        self.require_state(state)?;
        self.accepting.insert(state);
        Ok(())
    }

    /// Add edges from `from` to every state in `targets` on `symbol`.
    ///
    /// Repeated calls for the same `(from, symbol)` pair union their
    /// targets. Nothing is recorded if any state or the symbol is rejected,
    /// and an empty `targets` is validated but adds neither an edge nor a
    /// symbol.
    pub fn add_transition<S, I>(
        &mut self,
        from: StateId,
        symbol: S,
        targets: I,
    ) -> Result<(), ModelError>
    where
        S: Into<Symbol>,
        I: IntoIterator<Item = StateId>,
    {
        let symbol = symbol.into();
        let targets: StateSet = targets.into_iter().collect();

        self.require_state(from)?;
        for &target in &targets {
            self.require_state(target)?;
        }
        if let Symbol::Literal(c) = symbol {
            if self.closed_alphabet && !self.alphabet.contains(&c) {
                return Err(ModelError::InvalidSymbol(c));
            }
        }
        if targets.is_empty() {
            return Ok(());
        }

        if let Symbol::Literal(c) = symbol {
            self.alphabet.insert(c);
        }

        self.delta
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .extend(targets);
        Ok(())
    }

    /// Relabel `old` as `new` everywhere it is referenced.
    pub fn rename_state(&mut self, old: StateId, new: StateId) -> Result<(), ModelError> {
        self.require_state(old)?;
        if old == new {
            return Ok(());
        }
        if self.states.contains(&new) {
            return Err(ModelError::DuplicateState(new));
        }

        let relabel = |state: StateId| if state == old { new } else { state };
        let relabel_set = |set: &mut StateSet| {
            if set.remove(&old) {
                set.insert(new);
            }
        };

        relabel_set(&mut self.states);
        relabel_set(&mut self.accepting);
        self.initial = self.initial.map(relabel);
        if let Some(edges) = self.delta.remove(&old) {
            self.delta.insert(new, edges);
        }
        for targets in self.delta.values_mut().flat_map(|edges| edges.values_mut()) {
            relabel_set(targets);
        }
        Ok(())
    }

    /// States added so far.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The initial state, if one has been set.
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// Finish construction.
    pub fn build(self) -> Result<Automaton, ModelError> {
        let initial = self.initial.ok_or(ModelError::MissingInitialState)?;

        Ok(Automaton {
            states: self.states,
            alphabet: self.alphabet,
            initial,
            accepting: self.accepting,
            delta: self.delta,
        })
    }

    fn require_state(&self, state: StateId) -> Result<(), ModelError> {
        if self.states.contains(&state) {
            Ok(())
        } else {
            Err(ModelError::StateNotFound(state))
        }
    }
}
