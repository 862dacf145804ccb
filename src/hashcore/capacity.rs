//! The HashSet capacity.

use super::failure::{Failure, Result};
use super::root::cmp;

//  The default number of buckets of a freshly constructed collection.
pub const DEFAULT_CAPACITY: usize = 100;

//  Capacity.
//
//  The number of buckets of the table, never 0.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(usize);

impl Capacity {
    //  Creates an instance, rounding 0 up to 1.
    pub fn new(capacity: usize) -> Self { Self(cmp::max(capacity, 1)) }

    //  Returns the number of buckets.
    pub fn get(self) -> usize { self.0 }

    //  Returns the capacity after doubling.
    //
    //  #   Errors
    //
    //  Returns an error if the doubled capacity overflows.
    pub fn doubled(self) -> Result<Self> {
        self.0.checked_mul(2).map(Self).ok_or(Failure::CapacityOverflow)
    }

    //  Returns the bucket in which an element of the given hash belongs.
    pub fn bucket_of(self, hash: Hash) -> BucketIndex {
        //  Performed in u64, so the full hash participates even on 32-bit targets.
        BucketIndex((hash.0 % self.0 as u64) as usize)
    }

    //  Returns whether `occupied` buckets exceed the maximum load of 2/3.
    pub fn is_overloaded(self, occupied: NumberBuckets) -> bool {
        //  Widened, to avoid overflow for huge capacities.
        (occupied.0 as u128) * 3 > (self.0 as u128) * 2
    }

    //  Returns the end sentinel bucket, one past the last bucket.
    pub fn end(self) -> BucketIndex { BucketIndex(self.0) }
}

impl Default for Capacity {
    fn default() -> Self { Self::new(DEFAULT_CAPACITY) }
}

/// The hash of an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Hash(pub u64);

/// The index of a bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

/// A number of buckets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NumberBuckets(pub usize);

/// The number of elements in all Buckets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

/// The generation of the table, bumped whenever elements are relocated en masse.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Generation(pub usize);

impl Generation {
    //  Returns the following generation.
    pub fn next(self) -> Self { Generation(self.0.wrapping_add(1)) }
}
