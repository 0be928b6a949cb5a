//! Lazy simulation traces.

use super::engine::Engine;
use crate::core::StateSet;
use std::iter::FusedIterator;

/// One configuration in a [`Trace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep<'w> {
    /// Active states after consuming `consumed` and closing over epsilon
    pub active: StateSet,
    /// Character consumed to reach this step, `None` for the start
    pub consumed: Option<char>,
    /// Suffix of the word still to be read
    pub remaining: &'w str,
    /// Whether `active` contains an accepting state
    pub accepting: bool,
}

impl TraceStep<'_> {
    /// Check if the whole word has been read.
    pub fn is_last(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Iterator over the configurations visited while reading a word.
///
/// Yields one [`TraceStep`] for the starting closure and one per
/// character, so exactly `word.chars().count() + 1` items. Each step is
/// computed only when pulled, and the trace keeps no state beyond its own
/// position: dropping it is the only way to stop early, and calling
/// [`Engine::trace`] again starts over.
///
/// # Example
///
/// ```rust
/// use thompson::prelude::*;
///
/// let ab = Automaton::symbol('a').concat(&Automaton::symbol('b'));
/// let steps: Vec<_> = ab.trace("ab").collect();
///
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps[0].consumed, None);
/// assert_eq!(steps[1].consumed, Some('a'));
/// assert!(steps[2].is_last() && steps[2].accepting);
/// ```
#[derive(Debug)]
pub struct Trace<'e, 'w, E: ?Sized> {
    engine: &'e E,
    remaining: &'w str,
    active: Option<StateSet>,
    finished: bool,
}

impl<'e, 'w, E: Engine + ?Sized> Trace<'e, 'w, E> {
    pub(crate) fn new(engine: &'e E, word: &'w str) -> Self {
        Self {
            engine,
            remaining: word,
            active: None,
            finished: false,
        }
    }
}

impl<'w, E: Engine + ?Sized> Iterator for Trace<'_, 'w, E> {
    type Item = TraceStep<'w>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (active, consumed) = match self.active.take() {
            None => (self.engine.initial_closure(), None),
            Some(previous) => {
                let mut chars = self.remaining.chars();
                let Some(c) = chars.next() else {
                    self.finished = true;
                    return None;
                };
                self.remaining = chars.as_str();
                (self.engine.step_closed(&previous, c), Some(c))
            }
        };

        let step = TraceStep {
            accepting: self.engine.is_accepting_set(&active),
            active: active.clone(),
            consumed,
            remaining: self.remaining,
        };
        self.active = Some(active);
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.finished {
            0
        } else {
            let start = usize::from(self.active.is_none());
            self.remaining.chars().count() + start
        };
        (left, Some(left))
    }
}

impl<E: Engine + ?Sized> ExactSizeIterator for Trace<'_, '_, E> {}

impl<E: Engine + ?Sized> FusedIterator for Trace<'_, '_, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Automaton;

    #[test]
    fn trace_starts_with_initial_closure() {
        let automaton = Automaton::symbol('a').star();
        let first = automaton.trace("aa").next().unwrap();

        assert_eq!(first.active, automaton.initial_closure());
        assert_eq!(first.consumed, None);
        assert_eq!(first.remaining, "aa");
        assert!(first.accepting);
    }

    #[test]
    fn trace_shortens_remainder_one_character_at_a_time() {
        let automaton = Automaton::word("héllo");
        let remainders: Vec<&str> = automaton.trace("héllo").map(|s| s.remaining).collect();

        assert_eq!(remainders, vec!["héllo", "éllo", "llo", "lo", "o", ""]);
    }

    #[test]
    fn trace_length_is_word_length_plus_one() {
        let automaton = Automaton::symbol('a');
        let trace = automaton.trace("abc");

        assert_eq!(trace.len(), 4);
        assert_eq!(trace.count(), 4);
        assert_eq!(automaton.trace("").count(), 1);
    }

    #[test]
    fn trace_continues_through_dead_configurations() {
        let automaton = Automaton::symbol('a');
        let steps: Vec<_> = automaton.trace("bab").collect();

        assert_eq!(steps.len(), 4);
        assert!(steps[1..].iter().all(|s| s.active.is_empty() && !s.accepting));
    }

    #[test]
    fn trace_is_fused() {
        let automaton = Automaton::symbol('a');
        let mut trace = automaton.trace("a");

        assert!(trace.next().is_some());
        assert!(trace.next().is_some());
        assert!(trace.next().is_none());
        assert!(trace.next().is_none());
        assert_eq!(trace.len(), 0);
    }

    #[test]
    fn trace_agrees_with_acceptance() {
        let automaton = Automaton::word("ab").union(&Automaton::word("abc"));

        for word in ["ab", "abc", "a", "abcd"] {
            let last = automaton.trace(word).last().unwrap();
            assert_eq!(last.accepting, automaton.accepts(word), "{word:?}");
        }
    }

    #[test]
    fn trace_is_restartable() {
        let automaton = Automaton::symbol('a').star();

        let first: Vec<_> = automaton.trace("aaa").collect();
        let second: Vec<_> = automaton.trace("aaa").collect();

        assert_eq!(first, second);
    }
}
