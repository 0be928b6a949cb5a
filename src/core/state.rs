//! State identifiers and state sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identifier of a state, unique within one automaton.
///
/// Identifiers carry no meaning beyond identity. Combinators renumber
/// them freely, so callers should not rely on a particular id surviving
/// a combinator.
///
/// # Example
///
/// ```rust
/// use thompson::core::StateId;
///
/// let q = StateId::from(3);
/// assert_eq!(q.index(), 3);
/// assert_eq!(q.to_string(), "q3");
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Create an identifier from its raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index.
    pub const fn index(&self) -> u32 {
        self.0
    }
}

impl From<u32> for StateId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// An ordered set of states.
///
/// Ordered so that closures, traces and summaries are deterministic.
pub type StateSet = BTreeSet<StateId>;

/// Build a [`StateSet`] from raw indices.
///
/// # Example
///
/// ```rust
/// use thompson::core::{state_set, StateId};
///
/// let set = state_set([2, 0, 2]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&StateId::new(0)));
/// ```
pub fn state_set<I>(indices: I) -> StateSet
where
    I: IntoIterator<Item = u32>,
{
    indices.into_iter().map(StateId::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_index() {
        assert!(StateId::new(1) < StateId::new(2));
        assert_eq!(StateId::from(7), StateId::new(7));
    }

    #[test]
    fn state_set_deduplicates_and_sorts() {
        let set = state_set([5, 1, 5, 3]);
        let ids: Vec<u32> = set.iter().map(StateId::index).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn state_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&StateId::new(4)).unwrap();
        assert_eq!(json, "4");
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId::new(4));
    }
}
