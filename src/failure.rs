//! The Failure and Result types of this library.
//!
//! Any method which may grow the table, or which accepts a `Cursor`, may fail. The cause of the error is then
//! represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Misusing a `Cursor` is a contract violation: the convenience versions fail fast rather than let the caller
//! continue with a position that no longer means anything.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of buckets cannot be calculated due to overflowing.
    CapacityOverflow,
    /// The allocator could not allocate the bucket table.
    OutOfMemory,
    /// The cursor is the end sentinel, and designates no element.
    EndCursor,
    /// The cursor was issued before the table was rebuilt, or no longer designates a live element.
    StaleCursor,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("CapacityOverflow", format!("{}", Failure::CapacityOverflow));
        assert_eq!("StaleCursor", format!("{}", Failure::StaleCursor));
    }

    #[test]
    fn failure_ordering() {
        assert!(Failure::EndCursor < Failure::StaleCursor);
    }
}
