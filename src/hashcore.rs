//! Internal definition of HashSet buckets.

pub mod buckets;
pub mod capacity;
pub mod occupied;

mod hooks;

pub use self::hooks::HashHooks;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultHashHooks;

use super::failure;
use super::root;
