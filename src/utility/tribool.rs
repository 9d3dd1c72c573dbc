use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

use derive_more::IsVariant;

/// A boolean with a third, unknown state, combined according to Kleene's three-valued logic.
///
/// | `&`           | True          | False | Indeterminate |
/// |---------------|---------------|-------|---------------|
/// | True          | True          | False | Indeterminate |
/// | False         | False         | False | False         |
/// | Indeterminate | Indeterminate | False | Indeterminate |
///
/// | `\|`          | True | False         | Indeterminate |
/// |---------------|------|---------------|---------------|
/// | True          | True | True          | True          |
/// | False         | True | False         | Indeterminate |
/// | Indeterminate | True | Indeterminate | Indeterminate |
///
/// `==` compares the states themselves. The three-valued comparison, where anything compared to
/// `Indeterminate` is `Indeterminate`, is [`Tribool::equals`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Tribool {
    True,
    False,
    #[default]
    Indeterminate,
}

impl Tribool {
    pub const fn equals(self, other: Tribool) -> Tribool {
        match (self, other) {
            (Tribool::Indeterminate, _) | (_, Tribool::Indeterminate) => Tribool::Indeterminate,
            (a, b) => Tribool::from_bool(a.is_true() == b.is_true()),
        }
    }

    pub const fn not_equals(self, other: Tribool) -> Tribool {
        self.equals(other).not_const()
    }

    const fn from_bool(value: bool) -> Tribool {
        if value { Tribool::True } else { Tribool::False }
    }

    const fn not_const(self) -> Tribool {
        match self {
            Tribool::True => Tribool::False,
            Tribool::False => Tribool::True,
            Tribool::Indeterminate => Tribool::Indeterminate,
        }
    }
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        Tribool::from_bool(value)
    }
}

impl From<Option<bool>> for Tribool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Tribool::Indeterminate, Tribool::from_bool)
    }
}

impl From<Tribool> for Option<bool> {
    fn from(value: Tribool) -> Self {
        match value {
            Tribool::True => Some(true),
            Tribool::False => Some(false),
            Tribool::Indeterminate => None,
        }
    }
}

impl Not for Tribool {
    type Output = Tribool;

    fn not(self) -> Tribool {
        self.not_const()
    }
}

impl<T: Into<Tribool>> BitAnd<T> for Tribool {
    type Output = Tribool;

    fn bitand(self, rhs: T) -> Tribool {
        match (self, rhs.into()) {
            (Tribool::False, _) | (_, Tribool::False) => Tribool::False,
            (Tribool::True, Tribool::True) => Tribool::True,
            _ => Tribool::Indeterminate,
        }
    }
}

impl<T: Into<Tribool>> BitOr<T> for Tribool {
    type Output = Tribool;

    fn bitor(self, rhs: T) -> Tribool {
        match (self, rhs.into()) {
            (Tribool::True, _) | (_, Tribool::True) => Tribool::True,
            (Tribool::False, Tribool::False) => Tribool::False,
            _ => Tribool::Indeterminate,
        }
    }
}

impl BitAnd<Tribool> for bool {
    type Output = Tribool;

    fn bitand(self, rhs: Tribool) -> Tribool {
        rhs & self
    }
}

impl BitOr<Tribool> for bool {
    type Output = Tribool;

    fn bitor(self, rhs: Tribool) -> Tribool {
        rhs | self
    }
}

impl Display for Tribool {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Tribool::True => "true",
            Tribool::False => "false",
            Tribool::Indeterminate => "indeterminate",
        })
    }
}
