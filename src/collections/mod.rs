//! General-purpose collection types.
//!
//! # Purpose
//! The two collections here cover the most common needs of a small C-style program: a resizable
//! array with positional insertion and deletion, and a map from text keys to values.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which provides indexing, slicing and borrowed iteration without repeating them here.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
