//! A trie over a small, fixed alphabet. Every node has one child slot per letter and the caller
//! decides which slot a character lands in.

use std::fmt;
use std::rc::Rc;

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};

/// Maps a character to its slot in the alphabet. Shared between copies of a trie.
pub type CharIndex = Rc<dyn Fn(char) -> usize>;

/// A prefix tree whose nodes hold an array of `alphabet_size` child slots. A string is either
/// stored or not: adding it twice is the same as adding it once.
///
/// # Examples
///
/// ```
/// use refresher::AlphabetTrie;
///
/// let mut trie = AlphabetTrie::new(4, |c| "acgt".find(c).unwrap_or(usize::MAX));
///
/// trie.add("gattaca")?;
/// assert!(trie.has("gattaca")?);
///
/// // Prefixes are contained but were never added.
/// assert!(trie.contains("gatt")?);
/// assert!(!trie.has("gatt")?);
///
/// // 'u' isn't part of the alphabet.
/// assert!(trie.add("guu").is_err());
///
/// assert!(trie.remove("gattaca")?);
/// assert!(!trie.contains("g")?);
/// # Ok::<(), refresher::Error>(())
/// ```
#[derive(Clone)]
pub struct AlphabetTrie {
    alphabet_size: usize,
    char_to_index: CharIndex,
    nodes: Arena<Node>,
    root: NodeId,
}

impl fmt::Debug for AlphabetTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphabetTrie")
            .field("alphabet_size", &self.alphabet_size)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl AlphabetTrie {
    /// Generates an empty trie over `alphabet_size` letters. `char_to_index` must map every
    /// character this trie will ever see into `0..alphabet_size`; characters mapped anywhere else
    /// are rejected with [`Error::IndexOutOfRange`].
    pub fn new<F>(alphabet_size: usize, char_to_index: F) -> Self
    where
        F: Fn(char) -> usize + 'static,
    {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new(alphabet_size, None));
        Self {
            alphabet_size,
            char_to_index: Rc::new(char_to_index),
            nodes,
            root,
        }
    }

    /// A trie over the 26 letters `'a'..='z'`.
    pub fn ascii_lowercase() -> Self {
        Self::new(26, |c| (c as usize).wrapping_sub('a' as usize))
    }

    /// The number of letters in the alphabet.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Whether no strings are stored.
    pub fn is_empty(&self) -> bool {
        let root = &self.nodes[self.root];
        root.total_children == 0 && !root.terminal
    }

    /// Stores `s`, creating a node for every character that isn't on an existing path yet.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if a character of `s` is outside of the alphabet. Every
    /// character is checked before the trie is touched.
    pub fn add(&mut self, s: &str) -> Result<()> {
        let indices = self.indices(s)?;

        let mut current = self.root;
        for index in indices {
            current = match self.nodes[current].children[index] {
                Some(child) => child,
                None => self.attach(current, index),
            };
        }
        self.nodes[current].terminal = true;
        Ok(())
    }

    /// Whether `s` was added (and not removed since).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if a character on the existing path of `s` is outside of the
    /// alphabet.
    pub fn has(&self, s: &str) -> Result<bool> {
        Ok(self.descend(s)?.is_some_and(|node| self.nodes[node].terminal))
    }

    /// Whether `s` is a prefix of some stored string, including the string itself.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if a character on the existing path of `s` is outside of the
    /// alphabet.
    pub fn contains(&self, s: &str) -> Result<bool> {
        Ok(self.descend(s)?.is_some())
    }

    /// Removes `s` and prunes every node that no longer leads to a stored string. Returns whether
    /// `s` was stored.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if a character of `s` is outside of the alphabet. Nothing is
    /// removed in that case.
    pub fn remove(&mut self, s: &str) -> Result<bool> {
        let indices = self.indices(s)?;

        let mut current = self.root;
        for &index in &indices {
            match self.nodes[current].children[index] {
                Some(child) => current = child,
                None => return Ok(false),
            }
        }
        if !self.nodes[current].terminal {
            return Ok(false);
        }
        self.nodes[current].terminal = false;

        for &index in indices.iter().rev() {
            let node = &self.nodes[current];
            if node.total_children > 0 || node.terminal {
                break;
            }
            let parent = node.parent.expect("Only the root has no parent");
            self.detach(parent, index);
            current = parent;
        }
        Ok(true)
    }

    fn index_of(&self, c: char) -> Result<usize> {
        let index = (self.char_to_index)(c);
        if index >= self.alphabet_size {
            return Err(Error::IndexOutOfRange {
                character: c,
                index,
                alphabet_size: self.alphabet_size,
            });
        }
        Ok(index)
    }

    fn indices(&self, s: &str) -> Result<Vec<usize>> {
        s.chars().map(|c| self.index_of(c)).collect()
    }

    /// Follows `s` from the root. `None` means the path breaks off somewhere.
    fn descend(&self, s: &str) -> Result<Option<NodeId>> {
        let mut current = self.root;
        for c in s.chars() {
            match self.nodes[current].children[self.index_of(c)?] {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Creates an empty child of `parent` in slot `index`.
    fn attach(&mut self, parent: NodeId, index: usize) -> NodeId {
        let child = self.nodes.alloc(Node::new(self.alphabet_size, Some(parent)));
        let parent = &mut self.nodes[parent];
        assert!(
            parent.children[index].is_none(),
            "Node already exists in slot {index}"
        );
        parent.children[index] = Some(child);
        parent.total_children += 1;
        child
    }

    /// Unlinks and frees the child of `parent` in slot `index`.
    fn detach(&mut self, parent: NodeId, index: usize) {
        let parent = &mut self.nodes[parent];
        let child = parent.children[index].take().expect("Detaching an empty slot");
        parent.total_children -= 1;

        log::debug!("pruning trie node in slot {index}");
        self.nodes.free(child);
    }
}

#[derive(Clone, Debug)]
struct Node {
    children: Box<[Option<NodeId>]>,
    /// Only used to walk back up while pruning. The arena owns every node.
    parent: Option<NodeId>,
    /// Whether a stored string ends here.
    terminal: bool,
    /// How many of `children` are occupied.
    total_children: usize,
}

impl Node {
    fn new(alphabet_size: usize, parent: Option<NodeId>) -> Self {
        Self {
            children: vec![None; alphabet_size].into_boxed_slice(),
            parent,
            terminal: false,
            total_children: 0,
        }
    }
}
