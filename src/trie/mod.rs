//! Prefix trees over strings.
//!
//! * [`AlphabetTrie`] has a fixed number of child slots per node, chosen by a caller supplied
//!   character mapping. It stores each string at most once.
//! * [`CountingTrie`] accepts any `char`, keeps children in a map and counts how many times every
//!   string was added.
//!
//! Both prune nodes that no longer lead to a stored string when a string is removed, walking back
//! up from the end of the string through parent links.

mod alphabet;
mod counting;

pub use alphabet::{AlphabetTrie, CharIndex};
pub use counting::CountingTrie;
