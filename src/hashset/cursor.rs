//! The Cursor of the HashSet.

use super::hashcore::buckets::Position;
use super::hashcore::capacity::Generation;

/// `Cursor`
///
/// A position within a `HashSet`: the bucket, the offset within the chain of
/// that bucket, and the generation of the table at the time the `Cursor` was
/// issued.
///
/// A `Cursor` owns nothing and borrows nothing: it is a plain value, and all
/// accesses go through the `HashSet` it was obtained from, which checks it.
///
/// #   Invalidation
///
/// -   Growing the table, whether by `reserve` or by an `insert` which
///     triggers a rehash, invalidates all cursors.
/// -   Clearing the set invalidates all cursors.
/// -   Erasing an element shifts the elements which followed it in its chain,
///     hence a `Cursor` to a later element of the same chain now designates
///     the next one, or nothing.
///
/// Using an invalidated `Cursor` is detected on a best effort basis: a change
/// of generation is always detected, a shift within a chain only when the
/// `Cursor` falls off the end of the chain.
///
/// #   Example
///
/// ```
/// #   use chained::hashset::HashSet;
/// let mut set: HashSet<_> = HashSet::new();
/// let (cursor, inserted) = set.insert("Hello");
///
/// assert!(inserted);
/// assert_eq!(&"Hello", set.value(cursor));
/// assert_eq!(cursor, set.find("Hello"));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cursor {
    position: Position,
    generation: Generation,
}

impl Cursor {
    //  Creates an instance.
    pub(crate) fn new(position: Position, generation: Generation) -> Self {
        Self { position, generation }
    }

    /// Returns the index of the bucket designated by the `Cursor`.
    ///
    /// For the end sentinel, this is the number of buckets of the set.
    pub fn bucket(&self) -> usize { self.position.bucket.0 }

    /// Returns the offset, within its chain, of the element designated by the
    /// `Cursor`.
    pub fn offset(&self) -> usize { self.position.offset }

    //  Returns the position.
    pub(crate) fn position(&self) -> Position { self.position }

    //  Returns the generation.
    pub(crate) fn generation(&self) -> Generation { self.generation }
}
