//! Membership queries over a finished automaton.

use super::trace::Trace;
use crate::core::{Automaton, StateId, StateSet, Symbol};

/// Word simulation over an epsilon-NFA.
///
/// Implementors supply the automaton and an epsilon-closure; stepping,
/// word folding, acceptance and tracing are derived from those two.
/// All methods are read-only and total: unknown `(state, symbol)` pairs
/// simply contribute no successors.
///
/// # Example
///
/// ```rust
/// use thompson::prelude::*;
///
/// let ab = Automaton::symbol('a').concat(&Automaton::symbol('b'));
/// assert!(ab.accepts("ab"));
/// assert!(!ab.accepts("ba"));
///
/// let start = ab.initial_closure();
/// let after_a = ab.step_closed(&start, 'a');
/// assert!(!ab.is_accepting_set(&after_a));
/// ```
pub trait Engine {
    /// The automaton being simulated.
    fn automaton(&self) -> &Automaton;

    /// States reachable from `states` through zero or more epsilon edges.
    ///
    /// The result always contains `states` and is idempotent.
    fn closure(&self, states: &StateSet) -> StateSet;

    /// Epsilon-closure of the initial state.
    fn initial_closure(&self) -> StateSet {
        self.closure(&StateSet::from([self.automaton().initial_state()]))
    }

    /// One literal move, without closing over epsilon edges afterwards.
    fn step(&self, states: &StateSet, c: char) -> StateSet {
        let automaton = self.automaton();
        states
            .iter()
            .flat_map(|&state| automaton.targets(state, Symbol::Literal(c)))
            .copied()
            .collect()
    }

    /// One literal move followed by epsilon-closure.
    fn step_closed(&self, states: &StateSet, c: char) -> StateSet {
        self.closure(&self.step(states, c))
    }

    /// Fold `word` over `states`, starting from their closure.
    ///
    /// Iterative, so stack use does not grow with the word.
    fn extended(&self, states: &StateSet, word: &str) -> StateSet {
        let mut current = self.closure(states);
        for c in word.chars() {
            if current.is_empty() {
                break;
            }
            current = self.step_closed(&current, c);
        }
        current
    }

    /// Check if `states` contains an accepting state.
    fn is_accepting_set(&self, states: &StateSet) -> bool {
        !states.is_disjoint(self.automaton().accepting_states())
    }

    /// Check if `word` is accepted when starting from `state`.
    fn accepts_from(&self, state: StateId, word: &str) -> bool {
        self.is_accepting_set(&self.extended(&StateSet::from([state]), word))
    }

    /// Check if `word` is in the language of the automaton.
    fn accepts(&self, word: &str) -> bool {
        self.accepts_from(self.automaton().initial_state(), word)
    }

    /// Lazy step-by-step view of simulating `word`.
    ///
    /// See [`Trace`]. Each call starts a fresh trace.
    fn trace<'w>(&self, word: &'w str) -> Trace<'_, 'w, Self> {
        Trace::new(self, word)
    }
}

impl Engine for Automaton {
    fn automaton(&self) -> &Automaton {
        self
    }

    fn closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut pending: Vec<StateId> = states.iter().copied().collect();

        while let Some(state) = pending.pop() {
            for &next in self.targets(state, Symbol::Epsilon) {
                if closure.insert(next) {
                    pending.push(next);
                }
            }
        }

        closure
    }
}
