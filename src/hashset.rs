//! #   The HashSet.
//!
//! The `HashSet` is a set of unique elements, with cursor-based traversal and
//! erasure in the manner of C++ containers, alongside the usual Rust
//! iterators.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is an array of buckets: each bucket is a
//! chain of the elements whose hash, modulo the number of buckets, is the
//! index of the bucket.
//!
//! An ordered index of the non-empty buckets is maintained on every insertion
//! and erasure, so that traversal jumps from one non-empty bucket to the next
//! in logarithmic time, however sparse the table.
//!
//! The main consequences are:
//!
//! -   The number of buckets grows, by doubling, whenever more than 2/3 of the
//!     buckets would be occupied. It never shrinks.
//! -   Growing relocates every element, and thus invalidates every `Cursor`.
//!
//! #   Example: basic
//!
//! General usage of `HashSet` involve inserting values, either using `insert`,
//! to insert one value at a time, or `extend`, to insert multiple values at
//! once.
//!
//! The faillible equivalent exist too: `try_insert` and `try_extend` will
//! return a `Result` indicating whether the operation succeeded, and the cause
//! of its failure if it did not.
//!
//! ```
//! use chained::hashset::HashSet;
//!
//! let mut set: HashSet<_> = HashSet::new();
//! set.insert(1);
//! set.insert(2);
//!
//! assert_eq!(2, set.len());
//! assert_eq!(Some(&1), set.get(&1));
//!
//! set.extend([3, 4, 5].iter().copied());
//!
//! assert_eq!(5, set.len());
//! assert!(set.contains(&4));
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: cursors
//!
//! A `Cursor` designates an element of the set. It can be obtained from
//! `begin`, `find` or `insert`, moved forward with `advance`, and used to
//! `erase` the element it designates.
//!
//! ```
//! use chained::hashset::HashSet;
//!
//! let mut set: HashSet<_> = (0..10).collect();
//!
//! //  Erase all even elements, in a single pass.
//! let mut cursor = set.begin();
//!
//! while !set.is_end(cursor) {
//!     cursor = if set.value(cursor) % 2 == 0 {
//!         set.erase(cursor)
//!     } else {
//!         set.advance(cursor)
//!     };
//! }
//!
//! assert_eq!(5, set.len());
//! assert!(set.contains(&7));
//! assert!(!set.contains(&4));
//! ```
//!
//! #   Example: managing capacity
//!
//! `HashSet` provides multiple ways to manage the number of buckets:
//!
//! -   The constructors `with_capacity` and `with_capacity_and_hooks` allow
//!     specifying the initial number of buckets.
//! -   The `reserve` and `try_reserve` calls allow growing to a given number
//!     of buckets in advance.
//!
//! ```
//! use chained::failure::Failure;
//! use chained::hashset::HashSet;
//!
//! let mut set: HashSet<i32> = HashSet::with_capacity(8);
//! assert_eq!(8, set.capacity());
//!
//! //  Reserving never shrinks.
//! set.reserve(4);
//! assert_eq!(8, set.capacity());
//!
//! set.reserve(64);
//! assert_eq!(64, set.capacity());
//!
//! //  Failure to reserve leaves the set untouched.
//! assert_eq!(Err(Failure::OutOfMemory), set.try_reserve(usize::MAX));
//! assert_eq!(64, set.capacity());
//! ```

pub mod iterator;

mod cursor;
mod hashset;

pub use super::hashcore::HashHooks;
pub use self::cursor::Cursor;
pub use self::hashset::HashSet;

#[cfg(feature = "with-std")]
pub use super::hashcore::DefaultHashHooks;

use super::failure;
use super::hashcore;
use super::root;
