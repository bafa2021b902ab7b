//! This crate exposes a few classic in-memory containers mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A [`BinarySearchTree`] stores items so that, for every node, everything in
//! its left subtree compares less than or equal to it and everything in its
//! right subtree compares greater. Finding, inserting and removing an item
//! takes `O(height)`. This tree does not rebalance itself so the height is
//! only `O(lg N)` when items arrive in a friendly order.
//!
//! ## Heaps
//!
//! A [`MaxHeap`] or [`MinHeap`] keeps its greatest (or least) element at the
//! root of a complete binary tree stored in a `Vec`. Inserting and popping take
//! `O(lg N)` and peeking at the root is `O(1)`.
//!
//! ## Tries
//!
//! An [`AlphabetTrie`] is a prefix tree over a small alphabet with a fixed
//! number of children per node. A [`CountingTrie`] accepts any `char` and
//! keeps count of duplicate strings.
//!
//! ## Ordering
//!
//! The tree and the heaps are ordered by a comparator when one is given at
//! construction and by the elements' [`PartialOrd`] otherwise. See
//! [`comparison`] for the details.
//!
//! None of the containers are thread safe. Share them across threads behind
//! your own lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod bst;
pub mod comparison;
pub mod error;
pub mod heap;
pub mod trie;


pub use bst::BinarySearchTree;
pub use comparison::{Comparator, Comparison};
pub use error::{Counter, Error, Result};
pub use heap::{Heap, Max, MaxHeap, Min, MinHeap, Priority};
pub use trie::{AlphabetTrie, CharIndex, CountingTrie};
