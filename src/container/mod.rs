//! Containers with a capacity fixed at compile time.
//!
//! [`StaticVector`] behaves like a [`Vec`] that never allocates: its elements live inline, and
//! pushing past the capacity is an error ([`CapacityOverflow`]) rather than a reallocation.
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used
//! for borrowed iteration, [`IntoIter`] for owned iteration.

mod iter;
mod static_vector;
mod tests;

pub use iter::*;
pub use static_vector::*;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
