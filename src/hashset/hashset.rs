//! The HashSet

use super::root::{borrow, fmt, hash, iter};

use super::Cursor;
use super::failure::{Failure, Result};
use super::hashcore::HashHooks;
use super::hashcore::buckets::{BucketArray, Position};
use super::hashcore::capacity::{Capacity, Generation, DEFAULT_CAPACITY};
use super::iterator::{
    DifferenceIterator, IntersectionIterator, SymmetricDifferenceIterator,
    UnionIterator, ValueIterator,
};

#[cfg(feature = "with-std")]
use super::hashcore::DefaultHashHooks;

//
//  Public Interface
//

/// `HashSet`
#[cfg(not(feature = "with-std"))]
#[derive(Clone)]
pub struct HashSet<T, H: HashHooks> {
    hooks: H,
    buckets: BucketArray<T>,
    generation: Generation,
}

/// `HashSet`
#[cfg(feature = "with-std")]
#[derive(Clone)]
pub struct HashSet<T, H: HashHooks = DefaultHashHooks> {
    //  Hooks of the HashSet.
    hooks: H,
    //  The buckets, and the index of the occupied ones.
    buckets: BucketArray<T>,
    //  The generation of the table:
    //
    //  -   Bumped whenever elements are relocated en masse, by a rehash or a
    //      clear.
    //  -   Stamped on every Cursor issued, so stale ones can be detected.
    generation: Generation,
}

impl<T, H: HashHooks + Default> HashSet<T, H> {
    /// Creates a new instance of the `HashSet` with 100 buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(100, set.capacity());
    /// ```
    pub fn new() -> Self { Self::with_hooks(H::default()) }

    /// Creates a new instance of the `HashSet` with `capacity` buckets.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Panics
    ///
    /// Panics if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::with_capacity(4);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(4, set.capacity());
    ///
    /// let set: HashSet<i32> = HashSet::with_capacity(0);
    /// assert_eq!(1, set.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hooks(capacity, H::default())
    }
}

impl<T, H: HashHooks> HashSet<T, H> {
    /// Creates a new instance of the `HashSet` with 100 buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::{HashSet, DefaultHashHooks};
    /// let set: HashSet<i32> = HashSet::with_hooks(DefaultHashHooks::default());
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(100, set.capacity());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_capacity_and_hooks(DEFAULT_CAPACITY, hooks)
    }

    /// Creates a new instance of the `HashSet` with `capacity` buckets.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Panics
    ///
    /// Panics if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::{HashSet, DefaultHashHooks};
    /// let hooks = DefaultHashHooks::default();
    /// let set: HashSet<i32> = HashSet::with_capacity_and_hooks(4, hooks);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(4, set.capacity());
    /// ```
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        Self::try_with_capacity_and_hooks(capacity, hooks)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance of the `HashSet` with `capacity` buckets.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::{HashSet, DefaultHashHooks};
    /// let hooks = DefaultHashHooks::default();
    /// let set = HashSet::<i32>::try_with_capacity_and_hooks(usize::MAX, hooks);
    ///
    /// assert_eq!(Some(Failure::OutOfMemory), set.err());
    /// ```
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        let buckets = BucketArray::try_new(Capacity::new(capacity))?;

        Ok(Self { hooks, buckets, generation: Generation::default() })
    }

    /// Returns a reference to the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.buckets.len().0 }

    /// Returns the current number of buckets of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::with_capacity(1);
    /// assert_eq!(1, set.capacity());
    ///
    /// //  A single occupied bucket out of 1 exceeds the maximum load of 2/3.
    /// set.insert(1);
    /// assert_eq!(2, set.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buckets.capacity().get() }

    /// Returns the number of non-empty buckets.
    ///
    /// It never exceeds 2/3 of the `capacity`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(0, set.occupied_buckets());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.occupied_buckets());
    /// ```
    pub fn occupied_buckets(&self) -> usize { self.buckets.occupied().0 }

    /// Returns a cursor to the first element, or `end` if the set is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(set.end(), set.begin());
    ///
    /// set.insert(1);
    /// assert_eq!(&1, set.value(set.begin()));
    /// ```
    pub fn begin(&self) -> Cursor { self.cursor(self.buckets.first()) }

    /// Returns the end sentinel cursor, which designates no element.
    ///
    /// The end sentinel sits one past the last bucket.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::with_capacity(8);
    ///
    /// assert_eq!(8, set.end().bucket());
    /// assert_eq!(0, set.end().offset());
    /// ```
    pub fn end(&self) -> Cursor { self.cursor(self.buckets.end()) }

    /// Returns whether `cursor` is the end sentinel of the current generation.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.is_end(set.begin()));
    ///
    /// set.insert(1);
    /// assert!(!set.is_end(set.begin()));
    /// ```
    pub fn is_end(&self, cursor: Cursor) -> bool { cursor == self.end() }

    /// Returns a reference to the element designated by `cursor`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// let (cursor, _) = set.insert(1);
    ///
    /// assert_eq!(Ok(&1), set.try_value(cursor));
    /// assert_eq!(Err(Failure::EndCursor), set.try_value(set.end()));
    ///
    /// //  Reserving relocates all elements.
    /// set.reserve(1000);
    /// assert_eq!(Err(Failure::StaleCursor), set.try_value(cursor));
    /// ```
    pub fn try_value(&self, cursor: Cursor) -> Result<&T> {
        let position = self.locate(cursor)?;

        self.buckets.get(position).ok_or(Failure::StaleCursor)
    }

    /// Returns a reference to the element designated by `cursor`.
    ///
    /// Calling this method is equivalent to calling `try_value` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// let (cursor, _) = set.insert(1);
    ///
    /// assert_eq!(&1, set.value(cursor));
    /// ```
    pub fn value(&self, cursor: Cursor) -> &T {
        self.try_value(cursor).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns a cursor to the element following the one designated by
    /// `cursor`, or `end` if there is none.
    ///
    /// #   Errors
    ///
    /// Returns an error if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// let (cursor, _) = set.insert(1);
    ///
    /// assert_eq!(Ok(set.end()), set.try_advance(cursor));
    /// assert_eq!(Err(Failure::EndCursor), set.try_advance(set.end()));
    /// ```
    pub fn try_advance(&self, cursor: Cursor) -> Result<Cursor> {
        let position = self.locate(cursor)?;

        if self.buckets.get(position).is_none() {
            return Err(Failure::StaleCursor);
        }

        Ok(self.cursor(self.buckets.next(position)))
    }

    /// Returns a cursor to the element following the one designated by
    /// `cursor`, or `end` if there is none.
    ///
    /// Calling this method is equivalent to calling `try_advance` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// let mut visited = 0;
    /// let mut cursor = set.begin();
    ///
    /// while cursor != set.end() {
    ///     visited += 1;
    ///     cursor = set.advance(cursor);
    /// }
    ///
    /// assert_eq!(3, visited);
    /// ```
    pub fn advance(&self, cursor: Cursor) -> Cursor {
        self.try_advance(cursor).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Erases the element designated by `cursor`.
    ///
    /// The order of the remaining elements of the chain is preserved, and the
    /// capacity is left unchanged.
    ///
    /// Returns a cursor to the element which followed the erased one, or `end`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// let (cursor, _) = set.insert(1);
    ///
    /// assert_eq!(Err(Failure::EndCursor), set.try_erase(set.end()));
    ///
    /// assert_eq!(Ok(set.end()), set.try_erase(cursor));
    /// assert!(set.is_empty());
    /// ```
    pub fn try_erase(&mut self, cursor: Cursor) -> Result<Cursor> {
        self.try_extract(cursor).map(|(_, next)| next)
    }

    /// Erases the element designated by `cursor`.
    ///
    /// Calling this method is equivalent to calling `try_erase` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// let cursor = set.find(&2);
    /// set.erase(cursor);
    ///
    /// assert_eq!(2, set.len());
    /// assert_eq!(set.end(), set.find(&2));
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Cursor {
        self.try_erase(cursor).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Removes the element designated by `cursor`, returning it.
    ///
    /// Returns the element, and a cursor to the element which followed it, or
    /// `end`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `cursor` is the end sentinel, or is stale.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// let (cursor, _) = set.insert("Hello".to_string());
    ///
    /// let (value, next) = set.try_extract(cursor).unwrap();
    ///
    /// assert_eq!("Hello", value);
    /// assert_eq!(set.end(), next);
    /// ```
    pub fn try_extract(&mut self, cursor: Cursor) -> Result<(T, Cursor)> {
        let position = self.locate(cursor)?;

        if self.buckets.get(position).is_none() {
            return Err(Failure::StaleCursor);
        }

        let (element, next) = self.buckets.remove(position);

        Ok((element, self.cursor(next)))
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its capacity. All
    /// previously issued cursors are invalidated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::with_capacity(16);
    /// let (cursor, _) = set.insert(1);
    ///
    /// set.clear();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(16, set.capacity());
    /// assert_eq!(Err(Failure::StaleCursor), set.try_value(cursor));
    /// ```
    pub fn clear(&mut self) {
        log::trace!("clearing {} elements out of {} buckets", self.len(), self.capacity());

        self.buckets.clear();
        self.generation = self.generation.next();
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// let mut elements: Vec<_> = set.iter().copied().collect();
    /// elements.sort();
    ///
    /// assert_eq!(vec![1, 2, 3], elements);
    /// ```
    pub fn iter(&self) -> ValueIterator<'_, T> {
        ValueIterator::create(self.buckets.iter())
    }

    //  Returns a cursor of the current generation.
    fn cursor(&self, position: Position) -> Cursor {
        Cursor::new(position, self.generation)
    }

    //  Checks that `cursor` is of the current generation and is not the end
    //  sentinel.
    //
    //  The position returned may still not designate any element, if the
    //  chain shrank since `cursor` was issued.
    fn locate(&self, cursor: Cursor) -> Result<Position> {
        if cursor.generation() != self.generation {
            return Err(Failure::StaleCursor);
        }

        let position = cursor.position();

        if position == self.buckets.end() {
            return Err(Failure::EndCursor);
        }

        Ok(position)
    }
}

impl<T, H> HashSet<T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    /// Returns a cursor to the element matching `value`, or `end` if none.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert("Hello".to_string());
    ///
    /// let cursor = set.find("Hello");
    /// assert_eq!("Hello", set.value(cursor));
    ///
    /// assert_eq!(set.end(), set.find("World"));
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Cursor
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        let position = self.position_of(value).unwrap_or_else(|| self.buckets.end());

        self.cursor(position)
    }

    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&0));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.position_of(value).is_some()
    }

    /// Returns the number of elements matching the value: either 0 or 1.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(1);
    /// set.insert(1);
    ///
    /// assert_eq!(1, set.count(&1));
    /// assert_eq!(0, set.count(&0));
    /// ```
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        usize::from(self.contains(value))
    }

    /// Returns a reference to the value, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(1);
    ///
    /// assert_eq!(Some(&1), set.get(&1));
    /// assert_eq!(None, set.get(&0));
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.position_of(value).and_then(|position| self.buckets.get(position))
    }

    /// Inserts a value into the set.
    ///
    /// Returns a cursor to the element, and whether the value was inserted. If
    /// an equal value already exists, the set is left untouched, the value is
    /// dropped, and the cursor designates the existing element.
    ///
    /// If the insertion would leave more than 2/3 of the buckets occupied, the
    /// number of buckets is first doubled, as many times as necessary,
    /// invalidating all previously issued cursors.
    ///
    /// #   Errors
    ///
    /// Returns an error if the number of buckets cannot be grown, in which
    /// case the value is dropped, and the set is left without it.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// let (first, inserted) = set.try_insert(3).unwrap();
    /// assert!(inserted);
    ///
    /// let (second, inserted) = set.try_insert(3).unwrap();
    /// assert!(!inserted);
    ///
    /// assert_eq!(first, second);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(Cursor, bool)> {
        let hash = BucketArray::<T>::hash(&value, &self.hooks);

        if let Some(position) = self.buckets.find(&value, hash) {
            return Ok((self.cursor(position), false));
        }

        let mut bucket = self.buckets.capacity().bucket_of(hash);

        while self.buckets.would_overload(bucket) {
            let capacity = self.buckets.capacity().doubled()?;
            self.rehash(capacity)?;

            bucket = self.buckets.capacity().bucket_of(hash);
        }

        let position = self.buckets.push(bucket, value);

        Ok((self.cursor(position), true))
    }

    /// Inserts a value into the set.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if the value cannot be inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// assert!(set.insert("a").1);
    /// assert!(!set.insert("a").1);
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: T) -> (Cursor, bool) {
        self.try_insert(value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts multiple values in the set.
    ///
    /// If a value cannot be inserted because it is already present, it is
    /// dropped.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be inserted, in which case
    /// the values preceeding it have been inserted, and the values following it
    /// have not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(Ok(()), set.try_extend([1, 2, 3, 2].iter().copied()));
    /// assert_eq!(3, set.len());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        for value in collection {
            self.try_insert(value)?;
        }

        Ok(())
    }

    /// Inserts multiple values in the set.
    ///
    /// If a value cannot be inserted because it is already present, it is
    /// dropped.
    ///
    /// Calling this method is equivalent to calling `try_extend` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if any of the values cannot be inserted due to an error.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.extend([1, 2, 3].iter().copied());
    /// assert_eq!(3, set.len());
    /// ```
    pub fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Removes the element matching the value, returning it, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert("Hello".to_string());
    ///
    /// assert_eq!(Some("Hello".to_string()), set.take("Hello"));
    /// assert_eq!(None, set.take("Hello"));
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        let position = self.position_of(value)?;

        Some(self.buckets.remove(position).0)
    }

    /// Removes the element matching the value, returning whether there was
    /// one.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.take(value).is_some()
    }

    /// Grows the set to at least `capacity` buckets.
    ///
    /// If the set already has `capacity` buckets or more, nothing happens.
    ///
    /// Otherwise every element is relocated into its bucket under the new
    /// capacity, and all previously issued cursors are invalidated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the new buckets cannot be allocated. The behavior
    /// is transactional: in case of error, the set is left untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new();
    ///
    /// assert_eq!(Ok(()), set.try_reserve(1000));
    /// assert_eq!(1000, set.capacity());
    ///
    /// //  OutOfMemory signals that the allocator failed to provide the
    /// //  requested memory; here because the amount requested is too large.
    /// assert_eq!(Err(Failure::OutOfMemory), set.try_reserve(usize::MAX));
    /// assert_eq!(1000, set.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        let capacity = Capacity::new(capacity);

        if capacity <= self.buckets.capacity() {
            return Ok(());
        }

        self.rehash(capacity)
    }

    /// Grows the set to at least `capacity` buckets.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the new buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::with_capacity(4);
    /// set.insert(1);
    ///
    /// set.reserve(16);
    ///
    /// assert_eq!(16, set.capacity());
    /// assert!(set.contains(&1));
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Returns an iterator which yields the values representing the difference
    /// with `other`, i.e., the values that in `self` but not in `other`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let left: HashSet<_> = [1, 2, 3].iter().copied().collect();
    /// let right: HashSet<_> = [1, 3, 4].iter().copied().collect();
    ///
    /// let difference: Vec<_> = left.difference(&right).collect();
    ///
    /// assert_eq!(vec![&2], difference);
    /// ```
    pub fn difference<'a, OH>(&'a self, other: &'a HashSet<T, OH>)
        -> DifferenceIterator<'a, T, OH>
    where
        OH: HashHooks,
    {
        DifferenceIterator::create(self.iter(), other)
    }

    /// Returns an iterator which yields the values representing the symmetric
    /// difference with `other`, i.e., the values that are in `self` or in
    /// `other` but not in both.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let left: HashSet<_> = [1, 2, 3].iter().copied().collect();
    /// let right: HashSet<_> = [1, 3, 4].iter().copied().collect();
    ///
    /// let difference: Vec<_> = left.symmetric_difference(&right).collect();
    ///
    /// assert_eq!(vec![&2, &4], difference);
    /// ```
    pub fn symmetric_difference<'a, OH>(&'a self, other: &'a HashSet<T, OH>)
        -> SymmetricDifferenceIterator<'a, T, H, OH>
    where
        OH: HashHooks,
    {
        SymmetricDifferenceIterator::create(self, other)
    }

    /// Returns an iterator which yields the values representing the
    /// intersection with `other`, i.e., the values that in `self` and in
    /// `other`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let left: HashSet<_> = [1, 2, 3].iter().copied().collect();
    /// let right: HashSet<_> = [2, 3, 4].iter().copied().collect();
    ///
    /// let mut intersection: Vec<_> = left.intersection(&right).collect();
    /// intersection.sort();
    ///
    /// assert_eq!(vec![&2, &3], intersection);
    /// ```
    pub fn intersection<'a, OH>(&'a self, other: &'a HashSet<T, OH>)
        -> IntersectionIterator<'a, T, OH>
    where
        OH: HashHooks,
    {
        IntersectionIterator::create(self.iter(), other)
    }

    /// Returns an iterator which yields the values representing the union
    /// with `other`, i.e., the values that in `self` or in `other`, without
    /// duplicates.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let left: HashSet<_> = [1, 2, 3].iter().copied().collect();
    /// let right: HashSet<_> = [1, 3, 4].iter().copied().collect();
    ///
    /// let mut union: Vec<_> = left.union(&right).collect();
    /// union.sort();
    ///
    /// assert_eq!(vec![&1, &2, &3, &4], union);
    /// ```
    pub fn union<'a, OH>(&'a self, other: &'a HashSet<T, OH>)
        -> UnionIterator<'a, T, H>
    where
        OH: HashHooks,
    {
        UnionIterator::create(self, other.iter())
    }

    /// Returns `true` if `self` is disjoint from `other`, i.e., their
    /// intersection is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let odds: HashSet<_> = [1, 3, 5].iter().copied().collect();
    /// let evens: HashSet<_> = [2, 4, 6].iter().copied().collect();
    /// let one: HashSet<_> = [1].iter().copied().collect();
    ///
    /// assert!(odds.is_disjoint(&evens));
    /// assert!(!one.is_disjoint(&odds));
    /// ```
    pub fn is_disjoint<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks,
    {
        if self.len() > other.len() {
            other.is_disjoint(self)
        } else {
            self.iter().all(|e| !other.contains(e))
        }
    }

    /// Returns `true` if `other` contains at least all the elements of `self`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let odds: HashSet<_> = [1, 3, 5].iter().copied().collect();
    /// let evens: HashSet<_> = [2, 4, 6].iter().copied().collect();
    /// let one: HashSet<_> = [1].iter().copied().collect();
    ///
    /// assert!(!odds.is_subset(&evens));
    /// assert!(one.is_subset(&odds));
    /// ```
    pub fn is_subset<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks,
    {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns `true` if `self` contains at least all the elements of `other`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let odds: HashSet<_> = [1, 3, 5].iter().copied().collect();
    /// let one: HashSet<_> = [1].iter().copied().collect();
    ///
    /// assert!(odds.is_superset(&one));
    /// assert!(!one.is_superset(&odds));
    /// ```
    pub fn is_superset<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks,
    {
        other.is_subset(self)
    }

    //  Returns the position of the element matching `value`, if any.
    fn position_of<Q>(&self, value: &Q) -> Option<Position>
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        let hash = BucketArray::<T>::hash(value, &self.hooks);

        self.buckets.find(value, hash)
    }

    //  Relocates all elements into `capacity` buckets, starting a new
    //  generation.
    fn rehash(&mut self, capacity: Capacity) -> Result<()> {
        log::debug!("rehashing {} elements from {} to {} buckets",
            self.len(), self.capacity(), capacity.get());

        self.buckets.try_rehash(capacity, &self.hooks)?;
        self.generation = self.generation.next();

        Ok(())
    }
}

impl<T, H: HashHooks + Default> Default for HashSet<T, H> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug, H: HashHooks> fmt::Debug for HashSet<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.buckets.debug("HashSet", f)
    }
}

impl<T, H> Eq for HashSet<T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{}

impl<T, H, OH> PartialEq<HashSet<T, OH>> for HashSet<T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
    OH: HashHooks,
{
    fn eq(&self, other: &HashSet<T, OH>) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T, H> iter::FromIterator<T> for HashSet<T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result: HashSet<_, _> = HashSet::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

impl<T, H> iter::Extend<T> for HashSet<T, H>
where
    T: Eq + hash::Hash,
    H: HashHooks,
{
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        HashSet::extend(self, collection);
    }
}

impl<'a, T, H: HashHooks> iter::IntoIterator for &'a HashSet<T, H> {
    type Item = &'a T;
    type IntoIter = ValueIterator<'a, T>;

    fn into_iter(self) -> ValueIterator<'a, T> { self.iter() }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

//  mod tests
