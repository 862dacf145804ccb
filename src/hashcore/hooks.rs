//! Hooks of the HashSet.

#[cfg(feature = "with-std")]
use std::collections::hash_map;

use super::root::hash;

/// HashHooks
///
/// The hashing algorithm is the one hook of the HashSet: the bucket of an
/// element is its hash modulo the number of buckets.
///
/// The hasher built must be deterministic for the lifetime of a given set:
/// equal values must hash equal.
///
/// Also see DefaultHashHooks for the default, when the `with-std` feature is used.
pub trait HashHooks: hash::BuildHasher {}

/// DefaultHashHooks
///
/// Default hooks for the HashSet:
/// -   deferring hashing to `RandomState`, seeded once per instance.
#[cfg(feature = "with-std")]
#[derive(Clone, Debug, Default)]
pub struct DefaultHashHooks(hash_map::RandomState);

#[cfg(feature = "with-std")]
impl hash::BuildHasher for DefaultHashHooks {
    type Hasher = hash_map::DefaultHasher;

    fn build_hasher(&self) -> Self::Hasher {
        self.0.build_hasher()
    }
}

#[cfg(feature = "with-std")]
impl HashHooks for DefaultHashHooks {}
