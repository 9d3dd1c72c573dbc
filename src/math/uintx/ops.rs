use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Num, One, Unsigned, Zero};

use super::{ParseUIntXError, UIntX, UnsupportedRadix};
use crate::util::result::ResultExtension;

// Every operator is written once as `OpAssign<&UIntX>`, the remaining owned, borrowed and u64
// combinations forward to it.
macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $OpAssign<&UIntX> for UIntX {
            fn $op_assign(&mut self, $rhs: &UIntX) {
                let $lhs = self;
                $body
            }
        }

        impl $OpAssign<UIntX> for UIntX {
            fn $op_assign(&mut self, rhs: UIntX) {
                self.$op_assign(&rhs)
            }
        }

        impl $OpAssign<u64> for UIntX {
            fn $op_assign(&mut self, rhs: u64) {
                self.$op_assign(&UIntX::from(rhs))
            }
        }

        impl $Op<&UIntX> for &UIntX {
            type Output = UIntX;

            fn $op(self, rhs: &UIntX) -> UIntX {
                let mut result = self.clone();
                result.$op_assign(rhs);
                result
            }
        }

        impl $Op<UIntX> for &UIntX {
            type Output = UIntX;

            fn $op(self, rhs: UIntX) -> UIntX {
                self.$op(&rhs)
            }
        }

        impl $Op<&UIntX> for UIntX {
            type Output = UIntX;

            fn $op(mut self, rhs: &UIntX) -> UIntX {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<UIntX> for UIntX {
            type Output = UIntX;

            fn $op(mut self, rhs: UIntX) -> UIntX {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $Op<u64> for UIntX {
            type Output = UIntX;

            fn $op(mut self, rhs: u64) -> UIntX {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<u64> for &UIntX {
            type Output = UIntX;

            fn $op(self, rhs: u64) -> UIntX {
                self.clone().$op(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.add_chunks(rhs));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.try_sub_assign(rhs).throw());
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| lhs.mul_chunks(rhs));
impl_binary_op!(Div, div, DivAssign, div_assign, |lhs, rhs| *lhs = lhs.checked_div(rhs).throw());
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |lhs, rhs| *lhs = lhs.checked_rem(rhs).throw());

impl Sum for UIntX {
    fn sum<I: Iterator<Item = UIntX>>(iter: I) -> Self {
        iter.fold(UIntX::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a UIntX> for UIntX {
    fn sum<I: Iterator<Item = &'a UIntX>>(iter: I) -> Self {
        iter.fold(UIntX::zero(), |acc, value| acc + value)
    }
}

impl Product for UIntX {
    fn product<I: Iterator<Item = UIntX>>(iter: I) -> Self {
        iter.fold(UIntX::one(), |acc, value| acc * value)
    }
}

impl<'a> Product<&'a UIntX> for UIntX {
    fn product<I: Iterator<Item = &'a UIntX>>(iter: I) -> Self {
        iter.fold(UIntX::one(), |acc, value| acc * value)
    }
}

impl Zero for UIntX {
    fn zero() -> Self {
        UIntX::zero()
    }

    fn is_zero(&self) -> bool {
        UIntX::is_zero(self)
    }
}

impl One for UIntX {
    fn one() -> Self {
        UIntX::one()
    }
}

impl Num for UIntX {
    type FromStrRadixErr = ParseUIntXError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(UnsupportedRadix { radix }.into());
        }
        str.parse()
    }
}

impl Unsigned for UIntX {}

impl CheckedAdd for UIntX {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for UIntX {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        UIntX::checked_sub(self, v).ok()
    }
}

impl CheckedMul for UIntX {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for UIntX {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        UIntX::checked_div(self, v).ok()
    }
}

impl CheckedRem for UIntX {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        UIntX::checked_rem(self, v).ok()
    }
}
