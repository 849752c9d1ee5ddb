//! Contiguous collection types. [`Array`] is a fixed-size buffer that can be reallocated, and
//! [`Vector`] builds a growable sequence on top of it.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::{IndexOutOfBounds, RangeError, RangeOutOfBounds, Vector, DEFAULT_CAP};
