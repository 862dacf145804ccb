//! The chained buckets underlying the HashSet.

use super::root::{borrow, fmt, hash, iter, mem, Vec};

use super::capacity::{BucketIndex, Capacity, Hash, NumberBuckets, Size};
use super::failure::{Failure, Result};
use super::occupied::OccupiedIndex;

use self::borrow::Borrow;

//  The position of an element: its bucket, and its offset within the chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    pub bucket: BucketIndex,
    pub offset: usize,
}

impl Position {
    //  Creates the position of the first element of `bucket`.
    pub fn start_of(bucket: BucketIndex) -> Self { Self { bucket, offset: 0 } }
}

//  The storage.
//
//  Maintains, between any two calls:
//  -   `size` is the sum of the lengths of all chains.
//  -   `occupied` is exactly the set of buckets with a non-empty chain.
//  -   `table.len()` is `capacity`.
#[derive(Clone)]
pub struct BucketArray<T> {
    table: Vec<Vec<T>>,
    occupied: OccupiedIndex,
    size: Size,
    capacity: Capacity,
}

impl<T> BucketArray<T> {
    //  Creates an empty instance with `capacity` buckets.
    //
    //  #   Errors
    //
    //  Returns an error if the table cannot be allocated.
    pub fn try_new(capacity: Capacity) -> Result<Self> {
        let table = Self::allocate(capacity)?;

        Ok(Self { table, occupied: OccupiedIndex::new(), size: Size(0), capacity })
    }

    //  Returns the number of elements.
    pub fn len(&self) -> Size { self.size }

    //  Returns the number of buckets.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns the number of non-empty buckets.
    pub fn occupied(&self) -> NumberBuckets { self.occupied.len() }

    //  Returns the position one past the last element.
    pub fn end(&self) -> Position { Position::start_of(self.capacity.end()) }

    //  Returns the position of the first element, or `end`.
    pub fn first(&self) -> Position {
        self.occupied.first().map(Position::start_of).unwrap_or_else(|| self.end())
    }

    //  Returns the position following `position` in traversal order, or `end`.
    //
    //  `position` is assumed to designate a live element.
    pub fn next(&self, position: Position) -> Position {
        debug_assert!(self.get(position).is_some());

        if position.offset + 1 < self.chain(position.bucket).len() {
            return Position { bucket: position.bucket, offset: position.offset + 1 };
        }

        self.following(position.bucket)
    }

    //  Returns the element at `position`, if any.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.table.get(position.bucket.0).and_then(|chain| chain.get(position.offset))
    }

    //  Returns the chain of `bucket`.
    //
    //  #   Panics
    //
    //  If `bucket` is out of bounds.
    pub fn chain(&self, bucket: BucketIndex) -> &[T] { &self.table[bucket.0] }

    //  Returns whether inserting one more element into `bucket` would overload
    //  the table.
    pub fn would_overload(&self, bucket: BucketIndex) -> bool {
        let mut occupied = self.occupied.len();

        if self.chain(bucket).is_empty() {
            occupied.0 += 1;
        }

        self.capacity.is_overloaded(occupied)
    }

    //  Looks up the element matching `key`, whose hash is `hash`.
    pub fn find<Q>(&self, key: &Q, hash: Hash) -> Option<Position>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let bucket = self.capacity.bucket_of(hash);

        self.chain(bucket).iter()
            .position(|e| e.borrow() == key)
            .map(|offset| Position { bucket, offset })
    }

    //  Appends the element at the tail of the chain of `bucket`.
    //
    //  The element is assumed not to be present already, and `bucket` to be
    //  its bucket under the current capacity.
    pub fn push(&mut self, bucket: BucketIndex, element: T) -> Position {
        let chain = &mut self.table[bucket.0];

        if chain.is_empty() {
            self.occupied.insert(bucket);
        }

        chain.push(element);
        self.size.0 += 1;

        Position { bucket, offset: chain.len() - 1 }
    }

    //  Removes the element at `position`, preserving the order of the chain.
    //
    //  Returns the element and the position of the element which followed it
    //  in traversal order.
    //
    //  `position` is assumed to designate a live element.
    pub fn remove(&mut self, position: Position) -> (T, Position) {
        let chain = &mut self.table[position.bucket.0];
        let element = chain.remove(position.offset);
        let remaining = chain.len();

        self.size.0 -= 1;

        if remaining == 0 {
            self.occupied.erase(position.bucket);
        }

        let next = if position.offset < remaining {
            position
        } else {
            self.following(position.bucket)
        };

        (element, next)
    }

    //  Drops all elements, retaining the capacity.
    pub fn clear(&mut self) {
        //  Pre-pooping our pants in case a Drop panics.
        let occupied = mem::take(&mut self.occupied);
        self.size = Size(0);

        for bucket in occupied.iter() {
            self.table[bucket.0].clear();
        }
    }

    //  Returns an iterator over the elements, in traversal order.
    pub fn iter(&self) -> BucketIterator<'_, T> {
        BucketIterator { buckets: self, position: self.first(), remaining: self.size.0 }
    }

    //  Returns the position at the start of the first occupied bucket after
    //  `bucket`, or `end`.
    fn following(&self, bucket: BucketIndex) -> Position {
        self.occupied.next_after(bucket)
            .map(Position::start_of)
            .unwrap_or_else(|| self.end())
    }

    //  Allocates a table of empty chains.
    fn allocate(capacity: Capacity) -> Result<Vec<Vec<T>>> {
        let mut table = Vec::new();

        table.try_reserve_exact(capacity.get()).map_err(|_| Failure::OutOfMemory)?;
        table.extend(iter::repeat_with(Vec::new).take(capacity.get()));

        Ok(table)
    }
}

impl<T> BucketArray<T>
where
    T: hash::Hash,
{
    //  Moves all elements into a freshly allocated table of `capacity` buckets.
    //
    //  Elements are re-inserted in traversal order, each into the bucket its
    //  hash designates under the new capacity.
    //
    //  #   Errors
    //
    //  Returns an error if the new table cannot be allocated, in which case the
    //  instance is left untouched.
    pub fn try_rehash<H>(&mut self, capacity: Capacity, hooks: &H) -> Result<()>
    where
        H: hash::BuildHasher,
    {
        let table = Self::allocate(capacity)?;

        let mut former = mem::replace(&mut self.table, table);
        let occupied = mem::take(&mut self.occupied);

        self.capacity = capacity;

        for bucket in occupied.iter() {
            for element in mem::take(&mut former[bucket.0]) {
                let hash = Self::hash(&element, hooks);
                let bucket = capacity.bucket_of(hash);

                let chain = &mut self.table[bucket.0];

                if chain.is_empty() {
                    self.occupied.insert(bucket);
                }

                chain.push(element);
            }
        }

        Ok(())
    }

    //  Computes the hash of `key`.
    pub fn hash<Q, H>(key: &Q, hooks: &H) -> Hash
    where
        Q: ?Sized + hash::Hash,
        H: hash::BuildHasher,
    {
        use self::hash::Hasher;

        let mut hasher = hooks.build_hasher();
        key.hash(&mut hasher);
        Hash(hasher.finish())
    }
}

impl<T> BucketArray<T>
where
    T: fmt::Debug
{
    //  Formats the Debug representation of the buckets.
    //
    //  Only the occupied buckets are listed, prefixed by their index.
    pub fn debug(&self, name: &str, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{ capacity: {}, length: {}, buckets: {{",
            name, self.capacity.get(), self.size.0)?;

        for (index, bucket) in self.occupied.iter().enumerate() {
            if index == 0 {
                write!(f, " ")?;
            } else {
                write!(f, ", ")?;
            }

            write!(f, "{}: {:?}", bucket.0, self.chain(bucket))?;
        }

        write!(f, " }} }}")
    }
}

/// BucketIterator
///
/// An iterator over the elements of the buckets, skipping empty buckets.
pub struct BucketIterator<'a, T> {
    buckets: &'a BucketArray<T>,
    position: Position,
    remaining: usize,
}

impl<'a, T> Clone for BucketIterator<'a, T> {
    fn clone(&self) -> Self {
        BucketIterator {
            buckets: self.buckets,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> iter::Iterator for BucketIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let buckets: &'a BucketArray<T> = self.buckets;
        let element = buckets.get(self.position)?;

        self.position = buckets.next(self.position);
        self.remaining -= 1;

        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> iter::ExactSizeIterator for BucketIterator<'a, T> {}

impl<'a, T> iter::FusedIterator for BucketIterator<'a, T> {}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::IdentityHooks;

fn buckets_of(capacity: usize, elements: &[u64]) -> BucketArray<u64> {
    let mut buckets = BucketArray::try_new(Capacity::new(capacity)).unwrap();

    for &e in elements {
        let hash = BucketArray::<u64>::hash(&e, &IdentityHooks);
        let bucket = buckets.capacity().bucket_of(hash);
        buckets.push(bucket, e);
    }

    buckets
}

fn elements_of(buckets: &BucketArray<u64>) -> Vec<u64> {
    buckets.iter().copied().collect()
}

#[test]
fn empty() {
    let buckets = buckets_of(4, &[]);

    assert_eq!(Size(0), buckets.len());
    assert_eq!(NumberBuckets(0), buckets.occupied());
    assert_eq!(buckets.end(), buckets.first());
    assert_eq!(Position::start_of(BucketIndex(4)), buckets.end());
    assert_eq!(0, buckets.iter().count());
}

#[test]
fn push_chains_at_tail() {
    let buckets = buckets_of(10, &[3, 13, 23, 5]);

    assert_eq!(Size(4), buckets.len());
    assert_eq!(NumberBuckets(2), buckets.occupied());
    assert_eq!(&[3, 13, 23], buckets.chain(BucketIndex(3)));
    assert_eq!(&[5], buckets.chain(BucketIndex(5)));
}

#[test]
fn find() {
    let buckets = buckets_of(10, &[3, 13, 23]);
    let position = buckets.find(&13, Hash(13));

    assert_eq!(Some(Position { bucket: BucketIndex(3), offset: 1 }), position);
    assert_eq!(None, buckets.find(&33, Hash(33)));
}

#[test]
fn traversal_order() {
    let buckets = buckets_of(10, &[9, 3, 13, 0]);

    assert_eq!(vec![0, 3, 13, 9], elements_of(&buckets));
    assert_eq!(4, buckets.iter().len());
}

#[test]
fn next_skips_empty_buckets() {
    let buckets = buckets_of(100, &[1, 98]);

    let first = buckets.first();
    assert_eq!(Position::start_of(BucketIndex(1)), first);

    let second = buckets.next(first);
    assert_eq!(Position::start_of(BucketIndex(98)), second);

    assert_eq!(buckets.end(), buckets.next(second));
}

#[test]
fn remove_preserves_chain_order() {
    let mut buckets = buckets_of(10, &[3, 13, 23, 33]);

    let (element, next) = buckets.remove(Position { bucket: BucketIndex(3), offset: 1 });

    assert_eq!(13, element);
    assert_eq!(Position { bucket: BucketIndex(3), offset: 1 }, next);
    assert_eq!(&[3, 23, 33], buckets.chain(BucketIndex(3)));
    assert_eq!(Size(3), buckets.len());
}

#[test]
fn remove_last_of_chain() {
    let mut buckets = buckets_of(10, &[3, 13, 7]);

    let (element, next) = buckets.remove(Position { bucket: BucketIndex(3), offset: 1 });

    assert_eq!(13, element);
    assert_eq!(Position::start_of(BucketIndex(7)), next);
    assert_eq!(NumberBuckets(2), buckets.occupied());
}

#[test]
fn remove_emptying_bucket() {
    let mut buckets = buckets_of(10, &[3, 7]);

    let (_, next) = buckets.remove(Position::start_of(BucketIndex(3)));
    assert_eq!(Position::start_of(BucketIndex(7)), next);
    assert_eq!(NumberBuckets(1), buckets.occupied());

    let (_, next) = buckets.remove(Position::start_of(BucketIndex(7)));
    assert_eq!(buckets.end(), next);
    assert_eq!(NumberBuckets(0), buckets.occupied());
    assert_eq!(buckets.end(), buckets.first());
}

#[test]
fn would_overload() {
    let buckets = buckets_of(3, &[0, 1]);

    //  A third occupied bucket would exceed 2/3.
    assert!(buckets.would_overload(BucketIndex(2)));
    //  Chaining onto an occupied bucket does not.
    assert!(!buckets.would_overload(BucketIndex(1)));
}

#[test]
fn rehash() {
    let mut buckets = buckets_of(10, &[3, 13, 23, 5]);

    buckets.try_rehash(Capacity::new(20), &IdentityHooks).unwrap();

    assert_eq!(Capacity::new(20), buckets.capacity());
    assert_eq!(Size(4), buckets.len());
    assert_eq!(NumberBuckets(3), buckets.occupied());
    assert_eq!(&[3, 23], buckets.chain(BucketIndex(3)));
    assert_eq!(&[13], buckets.chain(BucketIndex(13)));
    assert_eq!(&[5], buckets.chain(BucketIndex(5)));
}

#[test]
fn rehash_out_of_memory() {
    let mut buckets = buckets_of(10, &[3, 13]);

    let result = buckets.try_rehash(Capacity::new(usize::MAX), &IdentityHooks);

    assert_eq!(Err(Failure::OutOfMemory), result);
    assert_eq!(Capacity::new(10), buckets.capacity());
    assert_eq!(vec![3, 13], elements_of(&buckets));
}

#[test]
fn clear() {
    let mut buckets = buckets_of(10, &[3, 13, 5]);

    buckets.clear();

    assert_eq!(Size(0), buckets.len());
    assert_eq!(NumberBuckets(0), buckets.occupied());
    assert_eq!(Capacity::new(10), buckets.capacity());
    assert!(buckets.chain(BucketIndex(3)).is_empty());
}

#[test]
fn debug() {
    use std::fmt::Write;

    struct Debugged<'a>(&'a BucketArray<u64>);

    impl<'a> fmt::Debug for Debugged<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0.debug("Buckets", f)
        }
    }

    let buckets = buckets_of(10, &[3, 13, 5]);

    let mut sink = String::new();
    let _ = write!(sink, "{:?}", Debugged(&buckets));

    assert_eq!("Buckets { capacity: 10, length: 3, buckets: { 3: [3, 13], 5: [5] } }", sink);
}

}
