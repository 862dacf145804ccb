//! Internal testing utilities

use core::cell;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::root::hash;

use crate::hashcore::HashHooks;

//  Identity Hooks
//
//  Hooks whose hash of an integer is the integer itself, making it trivial to
//  engineer collisions: with 10 buckets, 3, 13 and 23 share a chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHooks;

impl hash::BuildHasher for IdentityHooks {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher { IdentityHasher(0) }
}

impl HashHooks for IdentityHooks {}

//  The Hasher of IdentityHooks.
//
//  Each write folds into the state, so that a single integer hashes to itself.
pub struct IdentityHasher(u64);

impl IdentityHasher {
    fn fold(&mut self, value: u64) {
        self.0 = self.0.wrapping_mul(31).wrapping_add(value);
    }
}

impl hash::Hasher for IdentityHasher {
    fn finish(&self) -> u64 { self.0 }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.fold(byte as u64);
        }
    }

    fn write_u8(&mut self, i: u8) { self.fold(i as u64) }

    fn write_u16(&mut self, i: u16) { self.fold(i as u64) }

    fn write_u32(&mut self, i: u32) { self.fold(i as u64) }

    fn write_u64(&mut self, i: u64) { self.fold(i) }

    fn write_usize(&mut self, i: usize) { self.fold(i as u64) }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Compares and hashes as its `id`.
pub struct SpyElement<'a> {
    id: u32,
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(id: u32, count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { id, count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> PartialEq for SpyElement<'a> {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl<'a> Eq for SpyElement<'a> {}

impl<'a> hash::Hash for SpyElement<'a> {
    fn hash<S: hash::Hasher>(&self, state: &mut S) { hash::Hash::hash(&self.id, state) }
}

//  Counting Hooks
//
//  Hooks counting the number of hashes computed, to observe rehashing.
#[derive(Default)]
pub struct CountingHooks(cell::Cell<usize>);

impl CountingHooks {
    pub fn hashed(&self) -> usize { self.0.get() }
}

impl hash::BuildHasher for CountingHooks {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        self.0.set(self.0.get() + 1);
        IdentityHasher(0)
    }
}

impl HashHooks for CountingHooks {}
