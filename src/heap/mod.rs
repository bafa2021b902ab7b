//! Array backed binary heaps.
//!
//! [`MaxHeap`] and [`MinHeap`] are the same [`Heap`] with a different [`Priority`]: the max-heap
//! keeps the greatest element at the root and the min-heap the least. Both are ordered by a
//! comparator when one is given and by the elements' [`PartialOrd`] otherwise.
//!
//! # Examples
//!
//! ```
//! use refresher::{MaxHeap, MinHeap};
//!
//! let mut max = MaxHeap::from_elements([7, 5, 9, 6, 8])?;
//! assert_eq!(max.peek(), Some(&9));
//!
//! let mut popped = Vec::new();
//! while let Some(element) = max.pop()? {
//!     popped.push(element);
//! }
//! assert_eq!(popped, [9, 8, 7, 6, 5]);
//! assert!(max.is_empty());
//!
//! // A min-heap over the lengths of some words.
//! let mut min = MinHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! min.insert("banana")?;
//! min.insert("fig")?;
//! min.insert("pear")?;
//! assert_eq!(min.pop()?, Some("fig"));
//! # Ok::<(), refresher::Error>(())
//! ```

mod index;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::comparison::{Comparison, Order};
use crate::error::Result;

use index::{left_child_index, parent_index, right_child_index};

/// Decides which of two elements belongs closer to the root of a [`Heap`].
pub trait Priority {
    /// An element that compares this way against another is moved above it.
    const FAVORED: Comparison;
}

/// Greatest element first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl Priority for Max {
    const FAVORED: Comparison = Comparison::Greater;
}

/// Least element first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl Priority for Min {
    const FAVORED: Comparison = Comparison::Less;
}

/// A heap that pops its greatest element first.
pub type MaxHeap<T> = Heap<T, Max>;

/// A heap that pops its least element first.
pub type MinHeap<T> = Heap<T, Min>;

/// A binary heap stored in a `Vec`. The element at index `i` has children at `2i + 1` and `2i + 2`
/// and every parent is favored by `P` over, or equal to, its children. Duplicates are allowed.
pub struct Heap<T, P> {
    elements: Vec<T>,
    order: Order<T>,
    priority: PhantomData<P>,
}

impl<T, P> Default for Heap<T, P>
where
    T: PartialOrd,
    P: Priority,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the elements. The comparator, if any, is shared with the original.
impl<T, P> Clone for Heap<T, P>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            order: self.order.clone(),
            priority: PhantomData,
        }
    }
}

impl<T, P> fmt::Debug for Heap<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .field("order", &self.order)
            .finish()
    }
}

impl<T, P> Heap<T, P>
where
    P: Priority,
{
    /// Generates a new, empty heap ordered by `T`'s [`PartialOrd`] implementation.
    pub fn new() -> Self
    where
        T: PartialOrd,
    {
        Self::with_order(Order::intrinsic())
    }

    /// Generates a new, empty heap ordered by `compare`.
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_order(Order::comparator(compare))
    }

    /// Builds a heap by inserting `elements` from first to last.
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: PartialOrd,
    {
        Self::new().seeded(elements)
    }

    /// Builds a heap ordered by `compare` by inserting `elements` from first to last.
    pub fn from_elements_with_comparator<I, F>(elements: I, compare: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_comparator(compare).seeded(elements)
    }

    fn with_order(order: Order<T>) -> Self {
        Self {
            elements: Vec::new(),
            order,
            priority: PhantomData,
        }
    }

    fn seeded<I>(mut self, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        self.elements.reserve(elements.size_hint().0);
        for element in elements {
            self.insert(element)?;
        }
        Ok(self)
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `element` and sifts it up towards the root for as long as it is strictly favored
    /// over its parent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`][crate::Error::InvalidOperation] when `element` cannot be
    /// compared to one of its ancestors. The element is dropped and the heap is left untouched.
    pub fn insert(&mut self, element: T) -> Result<()> {
        self.elements.push(element);
        let last = self.elements.len() - 1;
        match self.sift_up_target(last) {
            Ok(target) => {
                self.sift_up(last, target);
                Ok(())
            }
            Err(e) => {
                self.elements.pop();
                Err(e)
            }
        }
    }

    /// The root element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Removes and returns the root element, or `None` if the heap is empty. The last element
    /// takes the root's place and sifts down below any child favored over it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`][crate::Error::InvalidOperation] when two of the elements on the
    /// sift path cannot be compared. The heap is left untouched.
    pub fn pop(&mut self) -> Result<Option<T>> {
        if self.elements.is_empty() {
            return Ok(None);
        }

        let root = self.elements.swap_remove(0);
        if self.elements.is_empty() {
            return Ok(Some(root));
        }
        match self.sift_down_target(0) {
            Ok(target) => {
                self.sift_down(0, target);
                Ok(Some(root))
            }
            Err(e) => {
                // Undo the `swap_remove`.
                self.elements.push(root);
                let last = self.elements.len() - 1;
                self.elements.swap(0, last);
                Err(e)
            }
        }
    }

    /// Whether `lhs` belongs above `rhs`.
    fn favors(&self, lhs: &T, rhs: &T) -> Result<bool> {
        Ok(self.order.compare(lhs, rhs)? == P::FAVORED)
    }

    /// Where the element at `index` comes to rest when sifted up. Nothing is moved.
    fn sift_up_target(&self, index: usize) -> Result<usize> {
        let element = &self.elements[index];
        let mut target = index;
        while target > 0 {
            let parent = parent_index(target);
            if !self.favors(element, &self.elements[parent])? {
                break;
            }
            target = parent;
        }
        Ok(target)
    }

    /// Where the element at `index` comes to rest when sifted down. Nothing is moved.
    fn sift_down_target(&self, index: usize) -> Result<usize> {
        let len = self.elements.len();
        let element = &self.elements[index];
        let mut target = index;
        loop {
            let left = left_child_index(target);
            if left >= len {
                break;
            }

            let right = right_child_index(target);
            let child =
                if right < len && self.favors(&self.elements[right], &self.elements[left])? {
                    right
                } else {
                    left
                };

            if !self.favors(&self.elements[child], element)? {
                break;
            }
            target = child;
        }
        Ok(target)
    }

    /// Moves the element at `index` up to its ancestor `target`, pushing every element in between
    /// down one level.
    fn sift_up(&mut self, mut index: usize, target: usize) {
        while index != target {
            let parent = parent_index(index);
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` down to its descendant `target`, pulling every element in
    /// between up one level.
    fn sift_down(&mut self, mut index: usize, target: usize) {
        let mut path = Vec::new();
        let mut node = target;
        while node != index {
            path.push(node);
            node = parent_index(node);
        }
        for child in path.into_iter().rev() {
            self.elements.swap(index, child);
            index = child;
        }
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn max_heap_sorts_descending(xs: Vec<i8>) -> bool {
            let mut heap = MaxHeap::from_elements(xs.iter().copied()).unwrap();
            let mut popped = Vec::new();
            while let Some(x) = heap.pop().unwrap() {
                popped.push(x);
            }

            let mut sorted = xs;
            sorted.sort_by(|a, b| b.cmp(a));
            popped == sorted
        }
    }

    quickcheck::quickcheck! {
        fn min_heap_sorts_ascending(xs: Vec<i8>) -> bool {
            let mut heap = MinHeap::from_elements(xs.iter().copied()).unwrap();
            let mut popped = Vec::new();
            while let Some(x) = heap.pop().unwrap() {
                popped.push(x);
            }

            let mut sorted = xs;
            sorted.sort();
            popped == sorted
        }
    }

    quickcheck::quickcheck! {
        fn interleaved_pops_take_the_current_max(xs: Vec<Option<i8>>) -> bool {
            // `Some` inserts, `None` pops.
            let mut heap = MaxHeap::new();
            let mut shadow = Vec::new();
            for x in xs {
                match x {
                    Some(x) => {
                        heap.insert(x).unwrap();
                        shadow.push(x);
                    }
                    None => {
                        shadow.sort();
                        if heap.pop().unwrap() != shadow.pop() {
                            return false;
                        }
                    }
                }
            }
            heap.len() == shadow.len()
        }
    }
}
