use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unrecognised option '{option}'")]
pub struct UnrecognisedOption {
    pub option: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("missing required option '{option}'")]
pub struct MissingRequiredOption {
    pub option: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct MissingRequiredValue {
    pub option: String,
    pub nargs: usize,
}

impl Display for MissingRequiredValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.nargs {
            1 => write!(f, "option '{}' requires an argument", self.option),
            n => write!(f, "option '{}' requires {} arguments", self.option, n),
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("option '{option}' does not take a value")]
pub struct OptionTakesNoValue {
    pub option: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("short option '{option}' and value must not be combined in '{argument}'")]
pub struct ShortOptionValueCombined {
    pub option: String,
    pub argument: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("'{name}' is not a valid subcommand")]
pub struct InvalidSubcommand {
    pub name: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid value '{value}' for option '{option}': {reason}")]
pub struct InvalidValue {
    pub option: String,
    pub value: String,
    pub reason: String,
}

/// Everything that can go wrong while scanning a command line.
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnrecognisedOption(UnrecognisedOption),
    MissingRequiredOption(MissingRequiredOption),
    MissingRequiredValue(MissingRequiredValue),
    OptionTakesNoValue(OptionTakesNoValue),
    ShortOptionValueCombined(ShortOptionValueCombined),
    InvalidSubcommand(InvalidSubcommand),
    InvalidValue(InvalidValue),
}

/// A [`ParseError`] along with the name of the program that produced it, displayed in the usual
/// `program: error: message` form.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{program}: error: {error}")]
pub struct OptParseError {
    pub program: String,
    #[error(source)]
    pub error: ParseError,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("no option matches '{key}'")]
pub struct NoSuchOption {
    pub key: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("option '{key}' was not given on the command line")]
pub struct ValueNotParsed {
    pub key: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("option '{key}' does not hold a value of type {expected}")]
pub struct BadValueCast {
    pub key: String,
    pub expected: &'static str,
}

/// Errors from looking up the value of an option after parsing.
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum GetError {
    NoSuchOption(NoSuchOption),
    ValueNotParsed(ValueNotParsed),
    BadValueCast(BadValueCast),
}
