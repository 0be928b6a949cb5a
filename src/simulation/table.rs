//! Precomputed per-state epsilon-closures.

use super::engine::Engine;
use crate::core::{Automaton, StateId, StateSet};
use std::collections::BTreeMap;

/// Engine that computes every single-state epsilon-closure once.
///
/// Closing a set then becomes a union of table rows instead of a graph
/// walk, which pays off when one automaton answers many queries. Results
/// are identical to the on-demand closure of [`Automaton`].
///
/// # Example
///
/// ```rust
/// use thompson::prelude::*;
///
/// let star = Automaton::symbol('a').star();
/// let table = ClosureTable::new(&star);
///
/// assert!(table.accepts("aaaa"));
/// assert_eq!(table.initial_closure(), star.initial_closure());
/// ```
#[derive(Clone, Debug)]
pub struct ClosureTable<'a> {
    automaton: &'a Automaton,
    closures: BTreeMap<StateId, StateSet>,
}

impl<'a> ClosureTable<'a> {
    /// Precompute the closure of every state of `automaton`.
    pub fn new(automaton: &'a Automaton) -> Self {
        let closures: BTreeMap<StateId, StateSet> = automaton
            .states()
            .iter()
            .map(|&state| (state, automaton.closure(&StateSet::from([state]))))
            .collect();

        log::debug!(
            "Precomputed epsilon closures for {} states",
            closures.len()
        );

        Self {
            automaton,
            closures,
        }
    }

    /// Cached closure of a single state, `None` for states outside Q.
    pub fn closure_of(&self, state: StateId) -> Option<&StateSet> {
        self.closures.get(&state)
    }
}

impl Engine for ClosureTable<'_> {
    fn automaton(&self) -> &Automaton {
        self.automaton
    }

    fn closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        for state in states {
            if let Some(row) = self.closures.get(state) {
                closure.extend(row.iter().copied());
            }
        }
        closure
    }
}

impl Automaton {
    /// Build a [`ClosureTable`] over this automaton.
    pub fn closure_table(&self) -> ClosureTable<'_> {
        ClosureTable::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state_set;

    #[test]
    fn table_matches_on_demand_closure() {
        let automaton = Automaton::symbol('a')
            .union(&Automaton::symbol('b'))
            .star();
        let table = automaton.closure_table();

        for &state in automaton.states() {
            let single = StateSet::from([state]);
            assert_eq!(table.closure(&single), automaton.closure(&single));
        }
        let all = automaton.states().clone();
        assert_eq!(table.closure(&all), automaton.closure(&all));
    }

    #[test]
    fn table_answers_membership() {
        let automaton = Automaton::word("ab").plus();
        let table = automaton.closure_table();

        for word in ["", "ab", "abab", "aba", "ba"] {
            assert_eq!(table.accepts(word), automaton.accepts(word), "{word:?}");
        }
    }

    #[test]
    fn closure_of_unknown_state_is_none() {
        let automaton = Automaton::epsilon();
        let table = automaton.closure_table();

        assert_eq!(table.closure_of(StateId::new(0)), Some(&state_set([0])));
        assert!(table.closure_of(StateId::new(1)).is_none());
    }
}
