//! Hash-based collection types. [`StrMap`] maps text keys to values, with buckets chosen by
//! [`fnv1a`].

pub mod fnv;
pub mod map;

#[doc(inline)]
pub use fnv::{bucket_index, fnv1a, Fnv1aBuildHasher, Fnv1aHasher};
#[doc(inline)]
pub use map::StrMap;
