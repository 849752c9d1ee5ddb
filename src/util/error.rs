use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the requested operation.
///
/// For deletion the valid range is `0..len`, for insertion it is `0..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A run of `count` elements starting at `index` extends past the end of the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Range of {count} elements at index {index} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    pub index: usize,
    pub count: usize,
    pub len: usize,
}

/// The error returned by ranged deletion, distinguishing a bad start index from a range that runs
/// off the end.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    IndexOutOfBounds(IndexOutOfBounds),
    RangeOutOfBounds(RangeOutOfBounds),
}
