#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Chained Library
//!
//! A from-scratch chained hash set.
//! -   The `HashSet`: a set of unique elements, stored in chains of buckets.
//! -   The `Cursor`: a generation-tagged position within a `HashSet`.
//!
//! Traversal only ever visits non-empty buckets, thanks to an ordered index
//! of the occupied buckets maintained alongside the table.

extern crate alloc;

pub mod failure;
pub mod hashset;

mod hashcore;
mod utils;

use self::utils::root;
