//! Shared state space for combining automata.

use crate::core::{Automaton, StateId, StateSet, Symbol, Transitions};
use std::collections::{BTreeMap, BTreeSet};

/// Contiguous id space that source automata are copied into.
///
/// Ids are handed out in increasing order from zero, either one at a time
/// with [`StateArena::fresh`] or as a whole block per source automaton with
/// [`StateArena::embed`]. Blocks never overlap, so repeated or nested
/// combinator calls cannot collide.
#[derive(Debug, Default)]
pub(crate) struct StateArena {
    next: u32,
    states: StateSet,
    alphabet: BTreeSet<char>,
    accepting: StateSet,
    delta: BTreeMap<StateId, Transitions>,
}

/// Where one source automaton landed inside a [`StateArena`].
#[derive(Debug, Clone)]
pub(crate) struct Embedding {
    offset: u32,
    initial: StateId,
    accepting: StateSet,
}

impl Embedding {
    /// Arena id of the source's initial state.
    pub(crate) fn initial(&self) -> StateId {
        self.initial
    }

    /// Arena ids of the source's accepting states.
    pub(crate) fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// First arena id of the block.
    pub(crate) fn offset(&self) -> u32 {
        self.offset
    }
}

impl StateArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arena whose first id is `start` instead of zero.
    pub(crate) fn starting_at(start: u32) -> Self {
        Self {
            next: start,
            ..Self::default()
        }
    }

    /// Allocate one new state.
    ///
    /// The counter stops at `u32::MAX`, so that id can be handed out but
    /// nothing after it. Callers size the arena before filling it.
    pub(crate) fn fresh(&mut self) -> StateId {
        let state = StateId::new(self.next);
        let inserted = self.states.insert(state);
        debug_assert!(inserted, "state arena exhausted at {state}");
        self.next = self.next.saturating_add(1);
        state
    }

    /// Copy every state, edge and symbol of `source` into a new block.
    ///
    /// Source states are numbered densely in ascending order starting at
    /// the block offset. Accepting flags are copied only when
    /// `keep_accepting` is set; the embedding reports them either way.
    pub(crate) fn embed(&mut self, source: &Automaton, keep_accepting: bool) -> Embedding {
        let offset = self.next;
        let table: BTreeMap<StateId, StateId> = source
            .states()
            .iter()
            .map(|&state| (state, self.fresh()))
            .collect();
        let rename = |state: &StateId| table.get(state).copied();

        for (from, edges) in &source.delta {
            let Some(from) = rename(from) else {
                continue;
            };
            for (&symbol, targets) in edges {
                let targets: StateSet = targets.iter().filter_map(rename).collect();
                if targets.is_empty() {
                    continue;
                }
                self.delta
                    .entry(from)
                    .or_default()
                    .entry(symbol)
                    .or_default()
                    .extend(targets);
            }
        }
        self.alphabet.extend(source.alphabet().iter().copied());

        let accepting: StateSet = source.accepting_states().iter().filter_map(rename).collect();
        if keep_accepting {
            self.accepting.extend(accepting.iter().copied());
        }
        let initial = rename(&source.initial_state()).unwrap_or(StateId::new(offset));

        Embedding {
            offset,
            initial,
            accepting,
        }
    }

    pub(crate) fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.delta
            .entry(from)
            .or_default()
            .entry(Symbol::Epsilon)
            .or_default()
            .insert(to);
    }

    pub(crate) fn set_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// Seal the arena into an automaton starting at `initial`.
    ///
    /// `initial` must have come from this arena.
    pub(crate) fn finish(self, initial: StateId) -> Automaton {
        debug_assert!(self.states.contains(&initial));

        Automaton {
            states: self.states,
            alphabet: self.alphabet,
            initial,
            accepting: self.accepting,
            delta: self.delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::state_set;

    #[test]
    fn blocks_are_disjoint_and_contiguous() {
        let mut arena = StateArena::new();
        let hub = arena.fresh();
        let first = arena.embed(&Automaton::word("ab"), true);
        let second = arena.embed(&Automaton::word("c"), true);

        assert_eq!(hub, StateId::new(0));
        assert_eq!(first.offset(), 1);
        assert_eq!(second.offset(), 4);
        assert_eq!(first.initial(), StateId::new(1));
        assert_eq!(second.initial(), StateId::new(4));
        assert_eq!(first.accepting(), &state_set([3]));
        assert_eq!(second.accepting(), &state_set([5]));
    }

    #[test]
    fn sparse_source_ids_are_packed() {
        let mut builder = AutomatonBuilder::new();
        for index in [10, 20, 30] {
            builder.add_state(StateId::new(index)).unwrap();
        }
        builder.set_initial(StateId::new(20)).unwrap();
        builder.add_accepting(StateId::new(30)).unwrap();
        builder
            .add_transition(StateId::new(20), 'x', [StateId::new(30)])
            .unwrap();
        let source = builder.build().unwrap();

        let mut arena = StateArena::new();
        arena.fresh();
        let embedding = arena.embed(&source, true);
        let packed = arena.finish(embedding.initial());

        assert_eq!(embedding.offset(), 1);
        assert_eq!(embedding.initial(), StateId::new(2));
        assert_eq!(embedding.accepting(), &state_set([3]));
        assert_eq!(packed.states(), &state_set([0, 1, 2, 3]));
        assert_eq!(
            packed.targets(StateId::new(2), Symbol::from('x')),
            &state_set([3])
        );
    }

    #[test]
    fn block_may_end_on_the_top_id() {
        let mut arena = StateArena::starting_at(u32::MAX - 1);
        let embedding = arena.embed(&Automaton::symbol('a'), true);
        let automaton = arena.finish(embedding.initial());

        assert_eq!(automaton.states(), &state_set([u32::MAX - 1, u32::MAX]));
        assert_eq!(
            automaton.targets(StateId::new(u32::MAX - 1), Symbol::from('a')),
            &state_set([u32::MAX])
        );
    }

    #[test]
    fn empty_target_sets_are_not_copied() {
        let mut source = Automaton::epsilon();
        source
            .delta
            .entry(StateId::new(0))
            .or_default()
            .insert(Symbol::from('z'), StateSet::new());

        let mut arena = StateArena::new();
        let embedding = arena.embed(&source, true);
        let copy = arena.finish(embedding.initial());

        assert!(copy.transitions_from(StateId::new(0)).is_empty());
        assert_eq!(copy.num_transitions(), 0);
    }

    #[test]
    fn accepting_flags_are_optional() {
        let mut arena = StateArena::new();
        let embedding = arena.embed(&Automaton::symbol('a'), false);
        let automaton = arena.finish(embedding.initial());

        assert_eq!(embedding.accepting(), &state_set([1]));
        assert!(automaton.accepting_states().is_empty());
    }
}
