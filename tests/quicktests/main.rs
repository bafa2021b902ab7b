//! Property tests exercising the public API only.

mod bst;
mod heap;
mod trie;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a container in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value
    Insert(T),
    /// Remove the value
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
