//! Index arithmetic for a complete binary tree stored level by level in a slice.
//!
//! ```text
//!          0
//!        /   \
//!       1     2
//!      / \   / \
//!     3   4 5   6
//! ```

/// The index of the parent of the node at `index`. The root is its own parent.
pub(crate) fn parent_index(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

/// The index of the left child of the node at `index`. It may be past the end of the heap.
pub(crate) fn left_child_index(index: usize) -> usize {
    index * 2 + 1
}

/// The index of the right child of the node at `index`. It may be past the end of the heap.
pub(crate) fn right_child_index(index: usize) -> usize {
    index * 2 + 2
}
