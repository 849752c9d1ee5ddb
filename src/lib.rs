//! This crate is a small collections library: a growable [`Vector`](collections::contiguous::Vector)
//! and a string-keyed, separately chained [`StrMap`](collections::hash::StrMap).
//!
//! # Purpose
//! Both types manage their own memory. The Vector owns a single raw allocation, sized and resized
//! through [`std::alloc`], and the map owns an array of buckets, each holding a singly linked chain
//! of heap-allocated entries. Neither uses [`Vec`] or [`std::collections`] internally.
//!
//! # Method
//! Storage is built on [`Array`](collections::contiguous::Array), a runtime-sized buffer that knows
//! how to allocate, reallocate and free itself. Length and capacity live next to the buffer in an
//! owning struct, so the metadata is never reachable through the element pointer and can't be
//! mutated by a caller.
//!
//! Element and value sizes come from the type system rather than from byte counts passed at each
//! call site.
//!
//! # Error Handling
//! Allocation failure is fatal and goes through [`handle_alloc_error`](std::alloc::handle_alloc_error).
//! A memory layout larger than [`isize::MAX`] panics with "Capacity overflow!".
//!
//! Range checked operations (inserting or deleting a run of elements) return a [`Result`] with a
//! strongly typed error, see [`IndexOutOfBounds`](collections::contiguous::IndexOutOfBounds) and
//! [`RangeError`](collections::contiguous::RangeError). The `Display` output of these errors is the
//! diagnostic message, it is up to the caller to print it.
//!
//! A missing key is never an error. Map lookups return [`Option`] or [`bool`] and removing an absent
//! key does nothing.
//!
//! # Thread Safety
//! Nothing here is synchronized. The types are [`Send`] and [`Sync`] when their contents are, but
//! sharing a container between threads needs an external lock, as with any other `&mut` API.
//!
//! # Dependencies
//! This crate depends on `derive_more` for the error types, because the derives remove a lot of
//! repetitive `Display` and `Error` boilerplate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
