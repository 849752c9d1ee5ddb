//! A module containing [`Array`], the raw buffer behind the other collections.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
