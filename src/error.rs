//! Errors surfaced by the containers in this crate.
//!
//! Absence is never an error: a missing item, an unknown string or an empty container is reported
//! through `bool`, `Option` or a zero count. The variants here describe misconfiguration (elements
//! that cannot be ordered, a character mapping that escapes its alphabet) and broken bookkeeping.

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which counter of a [`CountingTrie`][crate::CountingTrie] node was about to underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// The number of strings passing through a node.
    Occurrence,
    /// The number of strings ending exactly at a node.
    Terminal,
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occurrence => f.write_str("occurrence"),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}

/// The ways an operation can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two elements have no usable ordering between them. This happens when a container relies on
    /// the elements' intrinsic [`PartialOrd`] and `partial_cmp` returns `None` (e.g. `f64::NAN`).
    #[error("elements cannot be compared")]
    InvalidOperation,
    /// The character mapping of an [`AlphabetTrie`][crate::AlphabetTrie] produced an index outside
    /// of the alphabet it was built with.
    #[error("character {character:?} maps to index {index} but the alphabet has {alphabet_size} letters")]
    IndexOutOfRange {
        /// The offending character.
        character: char,
        /// The index the mapping function returned for it.
        index: usize,
        /// The alphabet size the trie was constructed with.
        alphabet_size: usize,
    },
    /// A counter of a [`CountingTrie`][crate::CountingTrie] would have gone negative. Nothing was
    /// modified.
    #[error("{counter} count of {count} cannot be decremented by {decrement}")]
    InternalInconsistency {
        /// The counter that would underflow.
        counter: Counter,
        /// Its current value.
        count: usize,
        /// The amount that was about to be subtracted.
        decrement: usize,
    },
}
