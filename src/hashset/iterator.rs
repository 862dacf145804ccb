//! A variety of iterators over HashSet.
//!
//! The most obvious iterator is of course the `ValueIterator`.
//!
//! Other iterators are the result of typical set operations such as
//! difference, symmetric_difference, intersection, and union.

use super::root::{hash, iter};

use super::hashcore::HashHooks;
use super::hashcore::buckets::BucketIterator;
use super::HashSet;

/// An iterator over the values of the HashSet.
///
/// Values are yielded bucket by bucket, in ascending order of bucket, and
/// within a bucket in chain order.
pub struct ValueIterator<'a, T>(BucketIterator<'a, T>);

impl<'a, T> ValueIterator<'a, T> {
    pub(crate) fn create(iterator: BucketIterator<'a, T>) -> Self {
        Self(iterator)
    }
}

impl<'a, T> Clone for ValueIterator<'a, T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, T> iter::Iterator for ValueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> iter::ExactSizeIterator for ValueIterator<'a, T> {}

impl<'a, T> iter::FusedIterator for ValueIterator<'a, T> {}

/// An iterator returning the elements in the left-hand side set that are not
/// also present in the right-hand side.
pub struct DifferenceIterator<'a, T, H: HashHooks> {
    left: ValueIterator<'a, T>,
    right: &'a HashSet<T, H>,
}

impl<'a, T, H: HashHooks> DifferenceIterator<'a, T, H> {
    pub(crate) fn create(
        left: ValueIterator<'a, T>,
        right: &'a HashSet<T, H>,
    )
        -> Self
    {
        DifferenceIterator { left, right }
    }
}

impl<'a, T, H: HashHooks> Clone for DifferenceIterator<'a, T, H> {
    fn clone(&self) -> Self {
        DifferenceIterator {
            left: self.left.clone(),
            right: self.right,
        }
    }
}

impl<'a, T, H> iter::Iterator for DifferenceIterator<'a, T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = self.right;
        self.left.by_ref().find(|e| !right.contains(*e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

/// An iterator returing the elements that are either in the left-hand side or
/// the right-hand side, but not in both.
pub struct SymmetricDifferenceIterator<'a, T, H: HashHooks, OH: HashHooks> {
    chain: iter::Chain<DifferenceIterator<'a, T, OH>, DifferenceIterator<'a, T, H>>,
}

impl<'a, T, H, OH> SymmetricDifferenceIterator<'a, T, H, OH>
where
    T: Eq + hash::Hash,
    H: HashHooks,
    OH: HashHooks,
{
    pub(crate) fn create(
        left: &'a HashSet<T, H>,
        right: &'a HashSet<T, OH>,
    )
        -> Self
    {
        let left_only = DifferenceIterator::create(left.iter(), right);
        let right_only = DifferenceIterator::create(right.iter(), left);

        SymmetricDifferenceIterator { chain: left_only.chain(right_only) }
    }
}

impl<'a, T, H: HashHooks, OH: HashHooks> Clone for SymmetricDifferenceIterator<'a, T, H, OH> {
    fn clone(&self) -> Self {
        SymmetricDifferenceIterator { chain: self.chain.clone() }
    }
}

impl<'a, T, H, OH> iter::Iterator for SymmetricDifferenceIterator<'a, T, H, OH>
where
    T: Eq + hash::Hash,
    H: HashHooks,
    OH: HashHooks,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next()
    }
}

/// An iterator returning the elements in the left-hand side set that are also
/// present in the right-hand side.
pub struct IntersectionIterator<'a, T, H: HashHooks> {
    left: ValueIterator<'a, T>,
    right: &'a HashSet<T, H>,
}

impl<'a, T, H: HashHooks> IntersectionIterator<'a, T, H> {
    pub(crate) fn create(
        left: ValueIterator<'a, T>,
        right: &'a HashSet<T, H>,
    )
        -> Self
    {
        IntersectionIterator { left, right }
    }
}

impl<'a, T, H: HashHooks> Clone for IntersectionIterator<'a, T, H> {
    fn clone(&self) -> Self {
        IntersectionIterator {
            left: self.left.clone(),
            right: self.right,
        }
    }
}

impl<'a, T, H> iter::Iterator for IntersectionIterator<'a, T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let right = self.right;
        self.left.by_ref().find(|e| right.contains(*e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

/// An iterator returing the elements that are either in the left-hand side or
/// the right-hand side, without duplicates.
pub struct UnionIterator<'a, T, H: HashHooks> {
    chain: iter::Chain<ValueIterator<'a, T>, DifferenceIterator<'a, T, H>>,
}

impl<'a, T, H> UnionIterator<'a, T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    pub(crate) fn create(
        left: &'a HashSet<T, H>,
        right: ValueIterator<'a, T>,
    )
        -> Self
    {
        UnionIterator {
            chain: left.iter().chain(DifferenceIterator::create(right, left))
        }
    }
}

impl<'a, T, H: HashHooks> Clone for UnionIterator<'a, T, H> {
    fn clone(&self) -> Self {
        UnionIterator { chain: self.chain.clone() }
    }
}

impl<'a, T, H> iter::Iterator for UnionIterator<'a, T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next()
    }
}
