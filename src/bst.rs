//! An unbalanced Binary Search Tree. Nodes live in an arena and remember their parent so deletion
//! can splice a node's successor into its place without recursion.
//!
//! Equal items are allowed and are kept in the left subtree of their twin.
//!
//! # Examples
//!
//! ```
//! use refresher::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.has(&1), Ok(false));
//! assert_eq!(tree.minimum(), None);
//!
//! tree.insert(10)?;
//! tree.insert(5)?;
//! tree.insert(15)?;
//! assert_eq!(tree.has(&5), Ok(true));
//! assert_eq!(tree.minimum(), Some(&5));
//! assert_eq!(tree.maximum(), Some(&15));
//!
//! // Removing an item hands it back.
//! assert_eq!(tree.remove(&10)?, Some(10));
//! assert_eq!(tree.has(&10), Ok(false));
//! # Ok::<(), refresher::Error>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::arena::{Arena, NodeId};
use crate::comparison::{Comparison, Order};
use crate::error::Result;

/// An unbalanced Binary Search Tree. Every operation costs `O(height)`, which degrades to `O(n)`
/// when items arrive in sorted order.
pub struct BinarySearchTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    order: Order<T>,
}

impl<T> Default for BinarySearchTree<T>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Copies every node. The comparator, if any, is shared with the original.
impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            order: self.order.clone(),
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len())
            .field("order", &self.order)
            .field("root", &self.root.map(|root| &self.nodes[root].item))
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty tree ordered by `T`'s [`PartialOrd`] implementation.
    pub fn new() -> Self
    where
        T: PartialOrd,
    {
        Self::with_order(Order::intrinsic())
    }

    /// Generates a new, empty tree ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use refresher::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1)?;
    /// tree.insert(2)?;
    ///
    /// // Reversed!
    /// assert_eq!(tree.minimum(), Some(&2));
    /// assert_eq!(tree.maximum(), Some(&1));
    /// # Ok::<(), refresher::Error>(())
    /// ```
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_order(Order::comparator(compare))
    }

    /// Builds a tree by inserting `items` from first to last.
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: PartialOrd,
    {
        Self::new().seeded(items)
    }

    /// Builds a tree ordered by `compare` by inserting `items` from first to last.
    pub fn from_items_with_comparator<I, F>(items: I, compare: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_comparator(compare).seeded(items)
    }

    fn with_order(order: Order<T>) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            order,
        }
    }

    fn seeded<I>(mut self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item)?;
        }
        Ok(self)
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `item` below the first empty slot found on its search path. Items that compare
    /// equal to a node go to its left.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`][crate::Error::InvalidOperation] when `item` cannot be compared
    /// to a node on its path. The tree is left untouched.
    pub fn insert(&mut self, item: T) -> Result<()> {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(item, None)));
            return Ok(());
        };

        loop {
            let node = &self.nodes[current];
            let go_right = self.order.compare(&item, &node.item)? == Comparison::Greater;
            let next = if go_right { node.right } else { node.left };

            match next {
                Some(child) => current = child,
                None => {
                    let child = Some(self.nodes.alloc(Node::new(item, Some(current))));
                    let parent = &mut self.nodes[current];
                    if go_right {
                        parent.right = child;
                    } else {
                        parent.left = child;
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Returns whether an item comparing equal to `item` is stored in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`][crate::Error::InvalidOperation] when `item` cannot be compared
    /// to a node on its path.
    pub fn has(&self, item: &T) -> Result<bool> {
        Ok(self.find(item)?.is_some())
    }

    /// The smallest item, or `None` if the tree is empty.
    pub fn minimum(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].item)
    }

    /// The largest item, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].item)
    }

    /// Removes the first node found that compares equal to `item` and returns its item. Removing
    /// something that isn't there does nothing and returns `None`.
    ///
    /// A node with two children is replaced by its in-order successor, the leftmost node of its
    /// right subtree. The successor is relinked, never copied.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`][crate::Error::InvalidOperation] when `item` cannot be compared
    /// to a node on its path. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use refresher::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::from_items([10, 5, 15, 8, 6, 9])?;
    ///
    /// assert_eq!(tree.remove(&8)?, Some(8));
    /// assert_eq!(tree.remove(&8)?, None);
    ///
    /// assert!(!tree.has(&8)?);
    /// for item in [10, 5, 15, 6, 9] {
    ///     assert!(tree.has(&item)?);
    /// }
    /// # Ok::<(), refresher::Error>(())
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<Option<T>> {
        let Some(target) = self.find(item)? else {
            return Ok(None);
        };
        let Node {
            left,
            right,
            parent,
            ..
        } = self.nodes[target];

        let replacement = match (left, right) {
            (_, None) => left,
            (None, Some(_)) => right,
            (Some(left), Some(right)) => Some(self.promote_successor(left, right)),
        };

        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(target) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }

        Ok(Some(self.nodes.free(target).item))
    }

    /// Detaches the leftmost node of the subtree at `right` and gives it both `left` and whatever
    /// remains of `right` as children. Returns the successor, whose parent is left for the caller.
    fn promote_successor(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let successor = self.leftmost(right);

        if successor != right {
            // Being leftmost, the successor has no left child. Its right subtree takes its place.
            let Node {
                parent, right: orphan, ..
            } = self.nodes[successor];
            let parent = parent.expect("Successor below the right child has a parent");

            self.nodes[parent].left = orphan;
            if let Some(orphan) = orphan {
                self.nodes[orphan].parent = Some(parent);
            }

            self.nodes[successor].right = Some(right);
            self.nodes[right].parent = Some(successor);
        }
        log::trace!(
            "promoting in-order successor (immediate right child: {})",
            successor == right
        );

        self.nodes[successor].left = Some(left);
        self.nodes[left].parent = Some(successor);
        successor
    }

    /// Searches for the node storing `item`.
    fn find(&self, item: &T) -> Result<Option<NodeId>> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match self.order.compare(item, &node.item)? {
                Comparison::Less => node.left,
                Comparison::Equal => return Ok(Some(id)),
                Comparison::Greater => node.right,
            };
        }
        Ok(None)
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    item: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Only used to find our way back up. The arena owns every node.
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(item: T, parent: Option<NodeId>) -> Self {
        Self {
            item,
            left: None,
            right: None,
            parent,
        }
    }
}

#[cfg(test)]
impl<T> BinarySearchTree<T> {
    /// Visits the left subtree, the node and then the right subtree, asserting that every child
    /// points back at its parent along the way.
    fn in_order(&self) -> Vec<&T> {
        fn visit<'a, T>(tree: &'a BinarySearchTree<T>, id: Option<NodeId>, out: &mut Vec<&'a T>) {
            let Some(id) = id else {
                return;
            };
            let node = &tree.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(tree.nodes[child].parent, Some(id));
            }
            visit(tree, node.left, out);
            out.push(&node.item);
            visit(tree, node.right, out);
        }

        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].parent, None);
        }
        let mut out = Vec::with_capacity(self.len());
        visit(self, self.root, &mut out);
        out
    }
}
