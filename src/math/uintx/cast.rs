use super::{CastOverflow, RADIX, UIntX};

/// Types that a [`UIntX`] can be converted into with [`uintx_cast`].
///
/// Integer conversions wrap, keeping the value modulo `2^bits` of the target type, in the same way
/// as an `as` cast between primitive integers does. Use [`TryFrom`] for a conversion that fails
/// instead.
pub trait UIntXCast: Sized {
    /// Converts `value` into `Self`.
    fn cast_from(value: &UIntX) -> Self;
}

/// Converts a [`UIntX`] into a primitive number or a [`String`], by folding the chunks from the
/// most significant down as `result * RADIX + chunk`.
///
/// # Examples
/// ```
/// # use gears::math::{UIntX, uintx_cast};
/// let stuff: UIntX = "1234567890".parse().unwrap();
/// assert_eq!(uintx_cast::<i64>(&stuff), 1234567890);
/// assert_eq!(uintx_cast::<String>(&stuff), "1234567890");
/// ```
pub fn uintx_cast<T: UIntXCast>(value: &UIntX) -> T {
    T::cast_from(value)
}

macro_rules! impl_cast_wrapping {
    ($($t:ty),*) => {
        $(
            impl UIntXCast for $t {
                fn cast_from(value: &UIntX) -> Self {
                    value.chunks.iter().rev().fold(0, |acc: $t, chunk| {
                        acc.wrapping_mul(RADIX as $t).wrapping_add(*chunk as $t)
                    })
                }
            }
        )*
    };
}

impl_cast_wrapping!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_cast_float {
    ($($t:ty),*) => {
        $(
            impl UIntXCast for $t {
                fn cast_from(value: &UIntX) -> Self {
                    value.chunks.iter().rev().fold(0.0, |acc: $t, chunk| {
                        acc * RADIX as $t + *chunk as $t
                    })
                }
            }
        )*
    };
}

impl_cast_float!(f32, f64);

impl UIntXCast for String {
    fn cast_from(value: &UIntX) -> Self {
        value.to_string()
    }
}

macro_rules! impl_try_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&UIntX> for $t {
                type Error = CastOverflow;

                fn try_from(value: &UIntX) -> Result<Self, Self::Error> {
                    let wide = value.chunks.iter().rev().try_fold(0_u128, |acc, chunk| {
                        acc.checked_mul(RADIX as u128)?.checked_add(*chunk as u128)
                    });

                    wide.and_then(|wide| <$t>::try_from(wide).ok()).ok_or(CastOverflow)
                }
            }

            impl TryFrom<UIntX> for $t {
                type Error = CastOverflow;

                fn try_from(value: UIntX) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_from!(u8, u16, u32, u64, u128, usize);
