//! Thompson's structural constructions.

use super::arena::StateArena;
use crate::core::Automaton;

/// Automaton for `L(left) ∪ L(right)`.
///
/// A fresh start state `q0` gets epsilon edges to both copied start
/// states; both accepting sets are kept.
pub fn union(left: &Automaton, right: &Automaton) -> Automaton {
    let mut arena = StateArena::new();
    let start = arena.fresh();
    let left = arena.embed(left, true);
    let right = arena.embed(right, true);

    arena.add_epsilon(start, left.initial());
    arena.add_epsilon(start, right.initial());

    log::debug!(
        "Union: blocks at q{} and q{} behind fresh start {}",
        left.offset(),
        right.offset(),
        start
    );
    arena.finish(start)
}

/// Automaton for `L(left) · L(right)`.
///
/// Accepting states of `left` lose their flag and gain an epsilon edge to
/// the copied start of `right`. Only `right`'s accepting states accept.
pub fn concat(left: &Automaton, right: &Automaton) -> Automaton {
    let mut arena = StateArena::new();
    let left = arena.embed(left, false);
    let right = arena.embed(right, true);

    for &state in left.accepting() {
        arena.add_epsilon(state, right.initial());
    }

    log::debug!(
        "Concat: {} accepting states of block q{} joined to block q{}",
        left.accepting().len(),
        left.offset(),
        right.offset()
    );
    arena.finish(left.initial())
}

/// Automaton for the Kleene closure `L(inner)*`.
///
/// A fresh accepting hub becomes the start state with an epsilon edge into
/// the copy of `inner`. Every accepting state of the copy loops back to the
/// copied start and returns to the hub.
pub fn star(inner: &Automaton) -> Automaton {
    let mut arena = StateArena::new();
    let hub = arena.fresh();
    let body = arena.embed(inner, true);

    arena.set_accepting(hub);
    arena.add_epsilon(hub, body.initial());
    for &state in body.accepting() {
        arena.add_epsilon(state, body.initial());
        arena.add_epsilon(state, hub);
    }

    log::debug!("Star: block q{} behind accepting hub {}", body.offset(), hub);
    arena.finish(hub)
}

/// Automaton for `L(inner) ∪ {ε}`.
pub fn optional(inner: &Automaton) -> Automaton {
    union(inner, &Automaton::epsilon())
}

/// Automaton for `L(inner)+`, one or more repetitions.
pub fn plus(inner: &Automaton) -> Automaton {
    concat(inner, &star(inner))
}

/// Union of any number of automata, folding left.
///
/// An empty input yields [`Automaton::empty`], the identity for union.
pub fn union_all<'a, I>(automata: I) -> Automaton
where
    I: IntoIterator<Item = &'a Automaton>,
{
    automata
        .into_iter()
        .fold(None, |acc: Option<Automaton>, next| {
            Some(match acc {
                None => next.clone(),
                Some(acc) => union(&acc, next),
            })
        })
        .unwrap_or_else(Automaton::empty)
}

/// Concatenation of any number of automata, folding left.
///
/// An empty input yields [`Automaton::epsilon`], the identity for
/// concatenation.
pub fn concat_all<'a, I>(automata: I) -> Automaton
where
    I: IntoIterator<Item = &'a Automaton>,
{
    automata
        .into_iter()
        .fold(None, |acc: Option<Automaton>, next| {
            Some(match acc {
                None => next.clone(),
                Some(acc) => concat(&acc, next),
            })
        })
        .unwrap_or_else(Automaton::epsilon)
}

impl Automaton {
    /// Method form of [`union`].
    pub fn union(&self, other: &Automaton) -> Automaton {
        union(self, other)
    }

    /// Method form of [`concat`].
    pub fn concat(&self, other: &Automaton) -> Automaton {
        concat(self, other)
    }

    /// Method form of [`star`].
    pub fn star(&self) -> Automaton {
        star(self)
    }

    /// Method form of [`optional`].
    pub fn optional(&self) -> Automaton {
        optional(self)
    }

    /// Method form of [`plus`].
    pub fn plus(&self) -> Automaton {
        plus(self)
    }
}
