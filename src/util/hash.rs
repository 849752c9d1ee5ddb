use std::hash::{BuildHasher, Hasher};

/// A hasher that ignores its input, sending every key to the same bucket. Used to build long
/// collision chains on purpose.
#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}
