use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use super::{DivisionByZero, EmptyInput, InvalidDigit, ParseUIntXError, SubtractionUnderflow};
use crate::util::fmt::DebugRaw;

/// The number of decimal digits stored in each chunk, equal to the number of decimal digits that
/// always fit in a `u32`.
pub const DIGITS10: usize = 9;

/// The base of the chunked representation, `10^DIGITS10`. A product of two chunks plus a carry
/// always fits in the `u64` storage type.
pub const RADIX: u64 = 1_000_000_000;

/// An unsigned integer of arbitrary precision.
///
/// The magnitude is stored as a little-endian sequence of decimal chunks, each holding a value in
/// `[0, RADIX)`. Storing decimal rather than binary chunks makes conversion to and from decimal
/// strings exact and cheap, at the cost of slightly slower arithmetic.
///
/// The representation is always normalized: there are no most-significant zero chunks, apart from
/// zero itself which is a single chunk of `0`. This makes the derived equality and hashing correct.
///
/// Arithmetic is available through the usual operators. Operators panic where the result can't be
/// represented (division by zero, or subtraction that would go below zero), and each of them has a
/// `checked_*` counterpart returning a [`Result`] instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of chunks in the left-hand operand.
/// - `m`: The number of chunks in the right-hand operand.
///
/// | Method | Complexity |
/// |-|-|
/// | `+`, `-` | `O(max(n, m))` |
/// | `*` | `O(n * m)` |
/// | `/`, `%` | `O(n * m * log(RADIX))` |
/// | `cmp` | `O(n)` |
///
/// # Examples
/// ```
/// # use gears::math::UIntX;
/// let mut stuff: UIntX = "6719847289364162472817421".parse().unwrap();
/// stuff += 1928317212831712_u64;
/// assert_eq!(stuff.to_string(), "6719847291292479685649133");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UIntX {
    pub(crate) chunks: Vec<u64>,
}

impl UIntX {
    /// Creates a new UIntX with the value zero.
    pub fn zero() -> UIntX {
        UIntX {
            chunks: vec![0],
        }
    }

    /// Creates a new UIntX with the value one.
    pub fn one() -> UIntX {
        UIntX {
            chunks: vec![1],
        }
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.chunks.len() == 1 && self.chunks[0] == 0
    }

    /// Returns the chunks of this value, least significant first. Each chunk is less than
    /// [`RADIX`].
    pub fn chunks(&self) -> &[u64] {
        &self.chunks
    }

    /// Returns the number of decimal digits needed to write this value. Zero has one digit.
    pub fn digits(&self) -> usize {
        let top = self.chunks[self.chunks.len() - 1];
        let mut top_digits = 1;
        let mut rest = top / 10;
        while rest > 0 {
            top_digits += 1;
            rest /= 10;
        }
        (self.chunks.len() - 1) * DIGITS10 + top_digits
    }

    /// Divides `self` by `divisor`, returning both the quotient and the remainder.
    ///
    /// # Errors
    /// Returns [`DivisionByZero`] if the divisor is zero.
    ///
    /// # Examples
    /// ```
    /// # use gears::math::UIntX;
    /// let (q, r) = UIntX::from(100_u32).div_rem(&UIntX::from(7_u32)).unwrap();
    /// assert_eq!((q, r), (UIntX::from(14_u32), UIntX::from(2_u32)));
    /// ```
    pub fn div_rem(&self, divisor: &UIntX) -> Result<(UIntX, UIntX), DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }

        let mut quotient = UIntX {
            chunks: vec![0; self.chunks.len()],
        };
        let mut remainder = UIntX::zero();

        for i in (0..self.chunks.len()).rev() {
            // remainder = remainder * RADIX + chunk
            remainder.shift(1);
            remainder.chunks[0] = self.chunks[i];
            remainder.normalize();

            let digit = remainder.quotient_digit(divisor);
            remainder.sub_chunks(&divisor.scaled(digit));
            quotient.chunks[i] = digit;
        }

        quotient.normalize();
        Ok((quotient, remainder))
    }

    /// Returns `self - rhs`, or an error if `rhs` is greater than `self`.
    pub fn checked_sub(&self, rhs: &UIntX) -> Result<UIntX, SubtractionUnderflow> {
        let mut result = self.clone();
        result.try_sub_assign(rhs)?;
        Ok(result)
    }

    /// Returns `self / rhs`, or an error if `rhs` is zero.
    pub fn checked_div(&self, rhs: &UIntX) -> Result<UIntX, DivisionByZero> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Returns `self % rhs`, or an error if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &UIntX) -> Result<UIntX, DivisionByZero> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Subtracts `rhs` from `self` in place, leaving `self` untouched if the result would be
    /// negative.
    pub fn try_sub_assign(&mut self, rhs: &UIntX) -> Result<(), SubtractionUnderflow> {
        if *rhs > *self {
            return Err(SubtractionUnderflow);
        }
        self.sub_chunks(rhs);
        Ok(())
    }
}

impl UIntX {
    /// Strips most-significant zero chunks, always keeping at least one.
    pub(crate) fn normalize(&mut self) {
        while self.chunks.len() > 1 && self.chunks[self.chunks.len() - 1] == 0 {
            self.chunks.pop();
        }
    }

    /// Multiplies by `RADIX^count` by inserting zero chunks at the least significant end. The
    /// caller is responsible for normalizing afterwards.
    pub(crate) fn shift(&mut self, count: usize) {
        self.chunks.splice(0..0, std::iter::repeat_n(0, count));
    }

    pub(crate) fn add_chunks(&mut self, rhs: &UIntX) {
        if self.chunks.len() < rhs.chunks.len() {
            self.chunks.resize(rhs.chunks.len(), 0);
        }

        let mut carry = 0;
        for (i, chunk) in self.chunks.iter_mut().enumerate() {
            // Once rhs runs out, only the carry is propagated through the remaining chunks.
            let sum = *chunk + rhs.chunks.get(i).copied().unwrap_or(0) + carry;
            *chunk = sum % RADIX;
            carry = sum / RADIX;
        }

        if carry != 0 {
            self.chunks.push(carry);
        }

        self.normalize();
    }

    /// Subtracts `rhs` chunk by chunk. `rhs` must not be greater than `self`.
    pub(crate) fn sub_chunks(&mut self, rhs: &UIntX) {
        let mut borrow: i64 = 0;
        for (i, chunk) in self.chunks.iter_mut().enumerate() {
            let mut diff = *chunk as i64 - rhs.chunks.get(i).copied().unwrap_or(0) as i64 - borrow;
            borrow = 0;
            while diff < 0 {
                diff += RADIX as i64;
                borrow += 1;
            }
            *chunk = diff as u64;
        }

        debug_assert_eq!(borrow, 0, "UIntX subtraction underflowed");
        self.normalize();
    }

    pub(crate) fn mul_chunks(&mut self, rhs: &UIntX) {
        let (multiplicand, multiplier) = if self.chunks.len() >= rhs.chunks.len() {
            (&*self, rhs)
        } else {
            (rhs, &*self)
        };

        let mut product = UIntX::zero();
        for (i, digit) in multiplier.chunks.iter().enumerate() {
            let mut partial = multiplicand.scaled(*digit);
            partial.shift(i);
            partial.normalize();
            product.add_chunks(&partial);
        }

        *self = product;
    }

    /// Returns a copy of `self` multiplied by a single chunk value.
    pub(crate) fn scaled(&self, digit: u64) -> UIntX {
        let mut result = self.clone();
        let mut carry = 0;
        for chunk in result.chunks.iter_mut() {
            let product = *chunk * digit + carry;
            *chunk = product % RADIX;
            carry = product / RADIX;
        }

        while carry != 0 {
            result.chunks.push(carry % RADIX);
            carry /= RADIX;
        }

        result.normalize();
        result
    }

    /// Finds the largest `q` in `[0, RADIX)` such that `divisor * q <= self`, via binary search.
    fn quotient_digit(&self, divisor: &UIntX) -> u64 {
        let mut low = 0;
        let mut high = RADIX - 1;

        while low < high {
            // Round up so that the range always shrinks when low is assigned.
            let mid = low + (high - low).div_ceil(2);
            if divisor.scaled(mid) <= *self {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        low
    }
}

impl Default for UIntX {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for UIntX {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chunks.len()
            .cmp(&other.chunks.len())
            .then_with(|| self.chunks.iter().rev().cmp(other.chunks.iter().rev()))
    }
}

impl PartialOrd for UIntX {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for UIntX {
                fn from(value: $t) -> Self {
                    let mut value = value as u128;
                    let mut chunks = Vec::new();
                    loop {
                        chunks.push((value % RADIX as u128) as u64);
                        value /= RADIX as u128;
                        if value == 0 {
                            break;
                        }
                    }
                    UIntX {
                        chunks,
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for UIntX {
    type Err = ParseUIntXError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EmptyInput.into());
        }

        if let Some((index, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(InvalidDigit { index, found }.into());
        }

        // Every character is an ASCII digit from here on, so byte slicing is safe.
        let padding = (DIGITS10 - s.len() % DIGITS10) % DIGITS10;
        let mut padded = String::with_capacity(s.len() + padding);
        padded.extend(std::iter::repeat_n('0', padding));
        padded.push_str(s);

        let mut chunks: Vec<u64> = padded
            .as_bytes()
            .chunks(DIGITS10)
            .map(|group| {
                group.iter().fold(0, |acc, byte| acc * 10 + (byte - b'0') as u64)
            })
            .collect();
        chunks.reverse();

        let mut result = UIntX {
            chunks,
        };
        result.normalize();
        Ok(result)
    }
}

impl Display for UIntX {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(self.chunks.len() * DIGITS10);
        let mut iter = self.chunks.iter().rev();

        if let Some(first) = iter.next() {
            text.push_str(&first.to_string());
        }
        for chunk in iter {
            text.push_str(&format!("{:0width$}", chunk, width = DIGITS10));
        }

        f.pad_integral(true, "", &text)
    }
}

impl Debug for UIntX {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UIntX").field(&DebugRaw(self)).finish()
    }
}
