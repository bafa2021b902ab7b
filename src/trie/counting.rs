//! A trie over any `char` that remembers how many times each string was added.

use std::collections::HashMap;

use crate::arena::{Arena, NodeId};
use crate::error::{Counter, Error, Result};

/// A prefix tree keyed by `char` that counts duplicates.
///
/// Every node other than the root tracks two numbers:
///
/// * its occurrence count, how many stored strings pass through it, and
/// * its terminal count, how many stored strings end exactly on it.
///
/// A node is pruned as soon as its occurrence count drops to zero, so the trie never holds a
/// path that no stored string uses.
///
/// # Examples
///
/// ```
/// use refresher::CountingTrie;
///
/// let mut trie: CountingTrie = ["Lorem ipsum", "Duplicate!", "Duplicate!"].into_iter().collect();
///
/// assert_eq!(trie.count_occurrences("Duplicate!"), 2);
/// assert!(trie.contains("Lorem"));
/// assert!(!trie.has("Lorem"));
///
/// assert!(trie.remove("Duplicate!")?);
/// assert_eq!(trie.count_occurrences("Duplicate!"), 1);
///
/// trie.add("Duplicate!");
/// assert_eq!(trie.remove_all("Duplicate!")?, 2);
/// assert!(!trie.has("Duplicate!"));
/// assert!(!trie.contains("D"));
/// # Ok::<(), refresher::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct CountingTrie {
    nodes: Arena<Node>,
    root: NodeId,
}

impl Default for CountingTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for CountingTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(strings: I) -> Self {
        let mut trie = Self::new();
        trie.extend(strings);
        trie
    }
}

impl<S> Extend<S> for CountingTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, strings: I) {
        for s in strings {
            self.add(s.as_ref());
        }
    }
}

impl CountingTrie {
    /// Generates an empty trie.
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new(None));
        Self { nodes, root }
    }

    /// Whether no strings are stored.
    pub fn is_empty(&self) -> bool {
        let root = &self.nodes[self.root];
        root.children.is_empty() && root.terminals == 0
    }

    /// Stores one more copy of `s`.
    pub fn add(&mut self, s: &str) {
        let mut current = self.root;
        for c in s.chars() {
            let child = match self.nodes[current].children.get(&c) {
                Some(&child) => child,
                None => self.attach(current, c),
            };
            self.nodes[child].occurrences += 1;
            current = child;
        }
        self.nodes[current].terminals += 1;
    }

    /// Whether at least one copy of `s` is stored.
    pub fn has(&self, s: &str) -> bool {
        self.count_occurrences(s) > 0
    }

    /// Whether `s` is a prefix of some stored string, including the string itself.
    pub fn contains(&self, s: &str) -> bool {
        self.descend(s).is_some()
    }

    /// How many copies of `s` are stored.
    pub fn count_occurrences(&self, s: &str) -> usize {
        self.descend(s).map_or(0, |node| self.nodes[node].terminals)
    }

    /// Removes one copy of `s`. Returns whether there was one to remove.
    ///
    /// # Errors
    ///
    /// [`Error::InternalInconsistency`] if a counter on the path of `s` would go negative. The
    /// trie is left untouched.
    pub fn remove(&mut self, s: &str) -> Result<bool> {
        match self.descend(s) {
            Some(tail) if self.nodes[tail].terminals > 0 => {
                self.unwind(s, tail, 1)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Removes every copy of `s`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// [`Error::InternalInconsistency`] if a counter on the path of `s` would go negative. The
    /// trie is left untouched.
    pub fn remove_all(&mut self, s: &str) -> Result<usize> {
        let Some(tail) = self.descend(s) else {
            return Ok(0);
        };
        let copies = self.nodes[tail].terminals;
        if copies > 0 {
            self.unwind(s, tail, copies)?;
        }
        Ok(copies)
    }

    /// Follows `s` from the root. `None` means the path breaks off somewhere.
    fn descend(&self, s: &str) -> Option<NodeId> {
        s.chars()
            .try_fold(self.root, |node, c| self.nodes[node].children.get(&c).copied())
    }

    /// Takes `copies` copies of `s`, which ends at `tail`, out of the counters and prunes every
    /// node left with no occurrences.
    fn unwind(&mut self, s: &str, tail: NodeId, copies: usize) -> Result<()> {
        let underflow = |counter, count| Error::InternalInconsistency {
            counter,
            count,
            decrement: copies,
        };

        // Check the whole path first so a failure leaves nothing half done.
        let terminals = self.nodes[tail].terminals;
        if terminals < copies {
            return Err(underflow(Counter::Terminal, terminals));
        }
        let mut current = tail;
        while current != self.root {
            let node = &self.nodes[current];
            if node.occurrences < copies {
                return Err(underflow(Counter::Occurrence, node.occurrences));
            }
            current = node.parent.expect("Only the root has no parent");
        }

        self.nodes[tail].terminals -= copies;
        let mut current = tail;
        for c in s.chars().rev() {
            let node = &mut self.nodes[current];
            node.occurrences -= copies;
            let parent = node.parent.expect("Only the root has no parent");

            if node.occurrences == 0 {
                debug_assert!(node.children.is_empty() && node.terminals == 0);
                self.nodes[parent].children.remove(&c);
                self.nodes.free(current);
                log::debug!("pruned trie node for {c:?}");
            }
            current = parent;
        }
        Ok(())
    }

    /// Creates an empty child of `parent` for `c`.
    fn attach(&mut self, parent: NodeId, c: char) -> NodeId {
        let child = self.nodes.alloc(Node::new(Some(parent)));
        let previous = self.nodes[parent].children.insert(c, child);
        assert!(previous.is_none(), "Node already exists for character {c:?}");
        child
    }
}

#[derive(Clone, Debug)]
struct Node {
    children: HashMap<char, NodeId>,
    /// Only used to walk back up while pruning. The arena owns every node.
    parent: Option<NodeId>,
    /// How many stored strings pass through this node. Unused on the root.
    occurrences: usize,
    /// How many stored strings end on this node.
    terminals: usize,
}

impl Node {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            children: HashMap::new(),
            parent,
            occurrences: 0,
            terminals: 0,
        }
    }
}
