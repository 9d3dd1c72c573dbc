//! Small value types: a cloneable type-erased [`AnyValue`], a three-state [`Tribool`], and
//! [`base64`] encoding.

mod any;
pub mod base64;
mod tests;
mod tribool;

pub use any::*;
#[doc(inline)]
pub use base64::InvalidBase64;
pub use tribool::*;
