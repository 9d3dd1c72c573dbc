use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("division by zero")]
pub struct DivisionByZero;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("subtraction would underflow an unsigned integer")]
pub struct SubtractionUnderflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("value is too large for the target integer type")]
pub struct CastOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot parse an integer from an empty string")]
pub struct EmptyInput;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid digit {found:?} at index {index}")]
pub struct InvalidDigit {
    pub index: usize,
    pub found: char,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("only radix 10 is supported, found radix {radix}")]
pub struct UnsupportedRadix {
    pub radix: u32,
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ParseUIntXError {
    Empty(EmptyInput),
    InvalidDigit(InvalidDigit),
    UnsupportedRadix(UnsupportedRadix),
}
