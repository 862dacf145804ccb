//! The index of occupied buckets.
//!
//! An ordered set of the indices of the non-empty buckets, so that finding the
//! next non-empty bucket is logarithmic rather than a linear scan over the
//! (possibly many) empty ones.

use super::capacity::{BucketIndex, NumberBuckets};
use super::root::{ops, BTreeSet};

//  Occupied buckets index.
#[derive(Clone, Debug, Default)]
pub struct OccupiedIndex(BTreeSet<BucketIndex>);

impl OccupiedIndex {
    //  Creates an empty instance.
    pub fn new() -> Self { Self(BTreeSet::new()) }

    //  Returns the number of occupied buckets.
    pub fn len(&self) -> NumberBuckets { NumberBuckets(self.0.len()) }

    //  Records that `bucket` became non-empty.
    //
    //  Idempotent.
    pub fn insert(&mut self, bucket: BucketIndex) { self.0.insert(bucket); }

    //  Records that `bucket` just became empty.
    pub fn erase(&mut self, bucket: BucketIndex) {
        let removed = self.0.remove(&bucket);
        debug_assert!(removed, "{:?} was not occupied", bucket);
    }

    //  Forgets all buckets.
    pub fn clear(&mut self) { self.0.clear(); }

    //  Returns the smallest occupied bucket, if any.
    pub fn first(&self) -> Option<BucketIndex> { self.0.iter().next().copied() }

    //  Returns the smallest occupied bucket strictly after `bucket`, if any.
    pub fn next_after(&self, bucket: BucketIndex) -> Option<BucketIndex> {
        use self::ops::Bound::{Excluded, Unbounded};

        self.0.range((Excluded(bucket), Unbounded)).next().copied()
    }

    //  Returns an iterator over the occupied buckets, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = BucketIndex> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {

use super::*;

fn index_of(buckets: &[usize]) -> OccupiedIndex {
    let mut index = OccupiedIndex::new();

    for &b in buckets {
        index.insert(BucketIndex(b));
    }

    index
}

#[test]
fn empty() {
    let index = OccupiedIndex::default();

    assert_eq!(NumberBuckets(0), index.len());
    assert_eq!(None, index.first());
    assert_eq!(None, index.next_after(BucketIndex(0)));
}

#[test]
fn insert_idempotent() {
    let index = index_of(&[3, 3, 3]);

    assert_eq!(NumberBuckets(1), index.len());
    assert_eq!(Some(BucketIndex(3)), index.first());
}

#[test]
fn first_next_after() {
    let index = index_of(&[17, 2, 9]);

    assert_eq!(Some(BucketIndex(2)), index.first());
    assert_eq!(Some(BucketIndex(2)), index.next_after(BucketIndex(0)));
    assert_eq!(Some(BucketIndex(9)), index.next_after(BucketIndex(2)));
    assert_eq!(Some(BucketIndex(9)), index.next_after(BucketIndex(5)));
    assert_eq!(Some(BucketIndex(17)), index.next_after(BucketIndex(9)));
    assert_eq!(None, index.next_after(BucketIndex(17)));
    assert_eq!(None, index.next_after(BucketIndex(100)));
}

#[test]
fn erase() {
    let mut index = index_of(&[1, 4, 6]);

    index.erase(BucketIndex(4));

    assert_eq!(NumberBuckets(2), index.len());
    assert_eq!(Some(BucketIndex(1)), index.first());
    assert_eq!(Some(BucketIndex(6)), index.next_after(BucketIndex(1)));
}

#[test]
fn clear() {
    let mut index = index_of(&[1, 4, 6]);

    index.clear();

    assert_eq!(NumberBuckets(0), index.len());
    assert_eq!(None, index.first());
}

#[test]
fn iter_ascending() {
    let index = index_of(&[8, 1, 5]);
    let buckets: Vec<_> = index.iter().map(|b| b.0).collect();

    assert_eq!(vec![1, 5, 8], buckets);
}

}
