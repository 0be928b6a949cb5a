//! Structural analysis of automata.
//!
//! These helpers look at the graph of an automaton without reading any
//! word: which states can ever become active, whether any word is
//! accepted, and clean copies with dead weight removed.

use crate::combinators::arena::StateArena;
use crate::core::{Automaton, StateId, StateSet};
use std::collections::VecDeque;

impl Automaton {
    /// States reachable from the initial state over any edges,
    /// literal or epsilon.
    pub fn reachable_states(&self) -> StateSet {
        let mut reachable = StateSet::from([self.initial_state()]);
        let mut queue = VecDeque::from([self.initial_state()]);

        while let Some(state) = queue.pop_front() {
            for targets in self.transitions_from(state).values() {
                for &next in targets {
                    if reachable.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        reachable
    }

    /// States that no run can ever visit.
    pub fn unreachable_states(&self) -> StateSet {
        self.states()
            .difference(&self.reachable_states())
            .copied()
            .collect()
    }

    /// Check if the automaton accepts no word at all.
    pub fn is_empty_language(&self) -> bool {
        self.reachable_states()
            .is_disjoint(self.accepting_states())
    }

    /// Copy without unreachable states.
    ///
    /// State ids and the alphabet are kept as they are. The initial state
    /// is always reachable, so the copy is never empty.
    pub fn trimmed(&self) -> Automaton {
        let reachable = self.reachable_states();
        log::trace!(
            "Trimming {} of {} states",
            self.num_states() - reachable.len(),
            self.num_states()
        );

        Automaton {
            delta: self
                .delta
                .iter()
                .filter(|(state, _)| reachable.contains(*state))
                .map(|(&state, edges)| (state, edges.clone()))
                .collect(),
            accepting: self
                .accepting
                .intersection(&reachable)
                .copied()
                .collect(),
            states: reachable,
            alphabet: self.alphabet.clone(),
            initial: self.initial,
        }
    }

    /// Copy with states relabelled densely from `start`, in ascending
    /// order of their current ids.
    ///
    /// Returns `None` if the largest new id, `start + |Q| - 1`, would not
    /// fit in `u32`.
    pub fn renumbered(&self, start: u32) -> Option<Automaton> {
        let count = u32::try_from(self.num_states()).ok()?;
        start.checked_add(count.checked_sub(1)?)?;

        let mut arena = StateArena::starting_at(start);
        let embedding = arena.embed(self, true);
        Some(arena.finish(embedding.initial()))
    }

    /// Id just past the largest one in use, handy for allocating
    /// non-colliding ids by hand.
    pub fn next_free_state(&self) -> StateId {
        StateId::new(self.max_index().saturating_add(1))
    }
}
