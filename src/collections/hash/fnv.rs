//! The 64 bit FNV-1a hash, used by [`StrMap`](super::StrMap) to pick a bucket for each key.
//!
//! For every byte of input the running hash is XORed with the byte and then multiplied by
//! [`FNV_PRIME`], starting from [`FNV_OFFSET_BASIS`]. Multiplication wraps.

use std::hash::{BuildHasher, Hasher};

/// The initial state of the hash.
pub const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
/// The multiplier applied after each byte.
pub const FNV_PRIME: u64 = 1099511628211;

/// A [`Hasher`] implementing FNV-1a over the raw bytes written to it.
///
/// Note that hashing a [`str`] through [`Hash`](std::hash::Hash) appends a terminator byte. Use
/// [`Hasher::write`] or [`fnv1a`] directly to hash just the bytes of a key.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Fnv1aHasher { state: FNV_OFFSET_BASIS }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= *byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Builds a fresh [`Fnv1aHasher`] for every key. This is the default hasher of
/// [`StrMap`](super::StrMap).
#[derive(Debug, Default, Clone, Copy)]
pub struct Fnv1aBuildHasher;

impl BuildHasher for Fnv1aBuildHasher {
    type Hasher = Fnv1aHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher::default()
    }
}

/// Returns the FNV-1a hash of `bytes`.
///
/// # Examples
/// ```
/// # use stlib::collections::hash::fnv1a;
/// assert_eq!(fnv1a(b""), 0xcbf29ce484222325);
/// assert_eq!(fnv1a(b"a"), 0xaf63dc4c8601ec8c);
/// ```
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Returns the bucket for `key` in a table of `modulus` buckets, or None if `modulus` is 0.
///
/// # Examples
/// ```
/// # use stlib::collections::hash::{bucket_index, fnv1a};
/// assert_eq!(bucket_index("key", 1000), Some((fnv1a(b"key") % 1000) as usize));
/// assert_eq!(bucket_index("key", 0), None);
/// ```
pub fn bucket_index(key: &str, modulus: usize) -> Option<usize> {
    fnv1a(key.as_bytes()).checked_rem(modulus as u64).map(|i| i as usize)
}
