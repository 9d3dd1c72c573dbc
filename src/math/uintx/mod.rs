//! A module containing [`UIntX`], an unsigned integer of arbitrary precision, and associated types.
//!
//! Besides the type itself, this module provides [`uintx_cast`] for converting back into primitive
//! numbers or text, and the errors produced by the checked operations and by parsing.
//!
//! [`UIntX`] is also re-exported under the parent module.

mod cast;
mod error;
mod ops;
mod tests;
mod uintx;

pub use cast::*;
pub use error::*;
pub use uintx::*;
