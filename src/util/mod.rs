pub mod error;

#[cfg(test)]
pub mod alloc;
#[cfg(all(test, feature = "hash"))]
pub mod hash;
#[cfg(test)]
pub mod panic;
