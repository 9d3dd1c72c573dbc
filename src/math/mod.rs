//! Numeric utilities: the arbitrary precision [`UIntX`] and a handful of integer algorithms that
//! work with it as well as with the primitive types.

mod algorithm;
mod generator;
mod tests;
pub mod uintx;

pub use algorithm::*;
pub use generator::*;
#[doc(inline)]
pub use uintx::{UIntX, uintx_cast};
