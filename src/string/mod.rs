//! Helpers for working with `&str`: case conversion, case insensitive predicates, searching by
//! character predicate, trimming, substring replacement, positional formatting with [`sprint`] and
//! a handful of transforms.
//!
//! All searches report byte indices, so their results can be used to slice the input directly.

mod case;
mod find;
mod format;
mod predicate;
mod replace;
mod tests;
mod transforms;
mod trim;

pub use case::*;
pub use find::*;
pub use format::*;
pub use predicate::*;
pub use replace::*;
pub use transforms::*;
pub use trim::*;
