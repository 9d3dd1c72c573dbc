#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
#[cfg(feature = "container")]
pub mod error;
#[cfg(feature = "math")]
pub mod fmt;
#[cfg(test)]
pub mod panic;
#[cfg(any(feature = "container", feature = "math"))]
pub mod result;
