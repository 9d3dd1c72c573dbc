use std::fmt::{self, Debug, Display, Formatter};

/// Writes the [`Display`] output of the inner value when formatted with [`Debug`], so that values
/// with a natural textual form don't get quoted or escaped inside debug structs.
pub struct DebugRaw<T: Display>(pub T);

impl<T: Display> Debug for DebugRaw<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
