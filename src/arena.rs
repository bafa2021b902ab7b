//! Index based node storage.
//!
//! Nodes that need to find their parent (the [`BinarySearchTree`][crate::BinarySearchTree] during
//! deletion, the tries while pruning) don't hold pointers to each other. They live in an [`Arena`]
//! and link to one another with [`NodeId`]s. Ownership stays with the arena, so a parent link can
//! never keep a node alive or free it twice. Freed slots are recycled by later allocations.

use std::ops::{Index, IndexMut};

/// A handle to a node stored in an [`Arena`]. It is only meaningful for the arena that produced it
/// and only until that node is freed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    /// Indices of `None` slots, reused before the vector grows.
    vacant: Vec<usize>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores `node` and returns its id.
    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        match self.vacant.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].is_none());
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node from the arena and hands it back.
    ///
    /// ## Panics
    ///
    /// When `id` was already freed.
    pub(crate) fn free(&mut self, id: NodeId) -> N {
        let node = self.slots[id.0].take().expect("Freeing a vacant arena slot");
        self.vacant.push(id.0);
        node
    }

    /// The number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id.0].as_ref().expect("Dangling arena id")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id.0].as_mut().expect("Dangling arena id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.free(a), 'a');
        assert_eq!(arena.len(), 1);

        let c = arena.alloc('c');
        assert_eq!(c, a);
        assert_eq!(arena[c], 'c');
        assert_eq!(arena[b], 'b');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn nodes_are_mutable_in_place() {
        let mut arena = Arena::new();
        let id = arena.alloc(1);
        arena[id] += 41;

        assert_eq!(arena[id], 42);
    }

    #[test]
    #[should_panic(expected = "Dangling arena id")]
    fn reading_a_freed_node_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc(());
        arena.free(id);

        let _ = &arena[id];
    }
}
