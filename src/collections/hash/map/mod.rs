//! A module containing [`StrMap`] and associated types.
//!
//! The other types here provide borrowed iteration over entries, keys or values in a map. There is
//! no mutable iterator over entries or keys because mutating the keys of a map in place would cause
//! a logic error.
//!
//! [`StrMap`] is also re-exported under the parent module.

mod iter;
mod str_map;

pub use iter::*;
pub use str_map::{StrMap, DEFAULT_BUCKETS};
