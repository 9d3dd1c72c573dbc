use std::fmt::{self, Display, Formatter};

use super::{InvalidValue, Value};

/// The way an option is named when looking it up: by its long name or by its short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Long(&'a str),
    Short(char),
}

impl Display for Key<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Long(name) => write!(f, "--{name}"),
            Key::Short(alias) => write!(f, "-{alias}"),
        }
    }
}

/// Anything that can be used to look up an option, a long name as a string or a short alias as
/// a `char`.
pub trait AsKey {
    fn as_key(&self) -> Key<'_>;
}

impl AsKey for Key<'_> {
    fn as_key(&self) -> Key<'_> {
        *self
    }
}

impl AsKey for &str {
    fn as_key(&self) -> Key<'_> {
        Key::Long(self)
    }
}

impl AsKey for String {
    fn as_key(&self) -> Key<'_> {
        Key::Long(self)
    }
}

impl AsKey for char {
    fn as_key(&self) -> Key<'_> {
        Key::Short(*self)
    }
}

/// A single command line option, built up from a long name with a chain of methods.
///
/// An option without a [`Value`] is a plain switch, it is either present or not. An option with a
/// value consumes as many of the following arguments as [`Value::nargs`] asks for.
///
/// # Examples
/// ```
/// # use gears::optparse::{Opt, value};
/// let opt = Opt::new("output")
///     .alias('o')
///     .help("where to write the result")
///     .value(value::<String>().metavar("file"))
///     .required();
///
/// assert!(opt.takes_value());
/// assert!(opt.is_required());
/// assert_eq!(opt.display_key(), "--output");
/// ```
#[derive(Debug, Clone)]
pub struct Opt {
    pub name: String,
    pub alias: Option<char>,
    pub help: String,
    pub(crate) value: Option<Box<dyn Value>>,
    required: bool,
    hidden: bool,
    active: bool,
}

impl Opt {
    /// Creates an option called `--name`. The name may be empty if an alias is given instead.
    pub fn new(name: impl Into<String>) -> Opt {
        Opt {
            name: name.into(),
            alias: None,
            help: String::new(),
            value: None,
            required: false,
            hidden: false,
            active: false,
        }
    }

    /// Creates an option that can only be written as `-alias`.
    pub fn short(alias: char) -> Opt {
        Opt::new("").alias(alias)
    }

    pub fn alias(mut self, alias: char) -> Opt {
        self.alias = Some(alias);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Opt {
        self.help = help.into();
        self
    }

    pub fn value<V: Value + 'static>(mut self, value: V) -> Opt {
        self.value = Some(Box::new(value));
        self
    }

    /// Marks the option as one that [`notify`](super::OptionParser::notify) insists on.
    pub fn required(mut self) -> Opt {
        self.required = true;
        self
    }

    /// Keeps the option out of the help output.
    pub fn hidden(mut self) -> Opt {
        self.hidden = true;
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns true if the option was present in the last parse.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub fn value_ref(&self) -> Option<&dyn Value> {
        self.value.as_deref()
    }

    /// Returns true if the option consumes at least one argument.
    pub fn takes_value(&self) -> bool {
        self.nargs() > 0
    }

    pub fn nargs(&self) -> usize {
        self.value.as_ref().map_or(0, |value| value.nargs())
    }

    /// The placeholder for this option's argument, or an empty string if it takes none.
    pub fn metavar(&self) -> &str {
        match &self.value {
            Some(value) if value.nargs() > 0 => value.metavar(),
            _ => "",
        }
    }

    /// Returns true if `key` names this option.
    pub fn is(&self, key: Key<'_>) -> bool {
        match key {
            Key::Long(name) => !self.name.is_empty() && self.name == name,
            Key::Short(alias) => self.alias == Some(alias),
        }
    }

    /// The preferred way to write this option, `--name` if it has one and `-alias` otherwise.
    pub fn display_key(&self) -> String {
        match (self.name.as_str(), self.alias) {
            ("", Some(alias)) => Key::Short(alias).to_string(),
            (name, _) => Key::Long(name).to_string(),
        }
    }

    pub(crate) fn activate(&mut self, key: &str, raw: &str) -> Result<(), InvalidValue> {
        if let Some(value) = &mut self.value {
            value.parse(key, raw)?;
        }
        self.active = true;
        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        self.active = false;
        if let Some(value) = &mut self.value {
            value.reset();
        }
    }
}
