//! Transition labels.
//!
//! A transition is labelled either by a literal input character or by
//! epsilon, the move that consumes no input. Keeping epsilon as its own
//! variant means it can never collide with a real character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of an automaton edge.
///
/// `Epsilon` orders before every literal, so the transitions leaving a
/// state iterate their epsilon edges first.
///
/// # Example
///
/// ```rust
/// use thompson::core::Symbol;
///
/// let a = Symbol::from('a');
/// assert_eq!(a, Symbol::Literal('a'));
/// assert!(!a.is_epsilon());
/// assert!(Symbol::Epsilon.is_epsilon());
/// assert!(Symbol::Epsilon < a);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Move without consuming input
    Epsilon,
    /// Move that consumes exactly this character
    Literal(char),
}

impl Symbol {
    /// Check if this is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The consumed character, or `None` for epsilon.
    pub fn literal(&self) -> Option<char> {
        match self {
            Self::Epsilon => None,
            Self::Literal(c) => Some(*c),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Literal(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => write!(f, "ε"),
            Self::Literal(c) => write!(f, "{c}"),
        }
    }
}
