//! Re-export core/std/alloc facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{borrow, cmp, fmt, hash, iter, mem, ops, result};

#[cfg(feature = "with-std")]
pub use std::{borrow, cmp, fmt, hash, iter, mem, ops, result};

pub use alloc::collections::BTreeSet;
pub use alloc::vec::Vec;

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
