//! Three-way comparison shared by the [`BinarySearchTree`][crate::BinarySearchTree] and the heaps.
//!
//! Containers are ordered one of two ways, in order of preference:
//!
//! 1. A [`Comparator`] handed to the container's constructor.
//! 2. The elements' own [`PartialOrd`] implementation.
//!
//! The choice is made once, when the container is built, and cached in an [`Order`]. Elements
//! that turn out to have no ordering between them (think `f64::NAN`) make the comparison fail with
//! [`Error::InvalidOperation`].
//!
//! # Examples
//!
//! ```
//! use refresher::Comparison;
//!
//! assert_eq!(Comparison::from(-7), Comparison::Less);
//! assert_eq!(Comparison::from(0), Comparison::Equal);
//! assert_eq!(Comparison::from(3.cmp(&1)), Comparison::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// The relative order of a left-hand and a right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The left-hand operand sorts before the right-hand operand.
    Less,
    /// Both operands sort the same.
    Equal,
    /// The left-hand operand sorts after the right-hand operand.
    Greater,
}

/// Reads an integer comparator result: negative is [`Less`][Comparison::Less], zero is
/// [`Equal`][Comparison::Equal] and positive is [`Greater`][Comparison::Greater].
impl From<i32> for Comparison {
    fn from(value: i32) -> Self {
        match value.cmp(&0) {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}

/// A caller supplied total order. It is reference counted so that cloning a container shares the
/// comparator instead of requiring it to be `Clone`.
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// The ordering a container settled on at construction.
pub(crate) enum Order<T> {
    /// The element type's own `partial_cmp`.
    Intrinsic(fn(&T, &T) -> Option<Ordering>),
    /// An explicit comparator, which always wins over the intrinsic order.
    Comparator(Comparator<T>),
}

impl<T> Order<T> {
    pub(crate) fn intrinsic() -> Self
    where
        T: PartialOrd,
    {
        Self::Intrinsic(<T as PartialOrd>::partial_cmp)
    }

    pub(crate) fn comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::Comparator(Rc::new(compare))
    }

    /// Compares `lhs` to `rhs`.
    pub(crate) fn compare(&self, lhs: &T, rhs: &T) -> Result<Comparison> {
        match self {
            Self::Intrinsic(partial_cmp) => partial_cmp(lhs, rhs)
                .map(Comparison::from)
                .ok_or(Error::InvalidOperation),
            Self::Comparator(compare) => Ok(compare(lhs, rhs).into()),
        }
    }
}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Intrinsic(partial_cmp) => Self::Intrinsic(*partial_cmp),
            Self::Comparator(compare) => Self::Comparator(Rc::clone(compare)),
        }
    }
}

impl<T> fmt::Debug for Order<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intrinsic(_) => f.write_str("Intrinsic"),
            Self::Comparator(_) => f.write_str("Comparator"),
        }
    }
}
