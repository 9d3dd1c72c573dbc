use std::any::{Any, type_name};
use std::cell::RefCell;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;

use super::InvalidValue;

/// The value half of an [`Opt`](super::Opt): how the raw argument text for an option is turned
/// into a typed value, and where that value ends up.
///
/// Implementations are created with the free functions in this module, such as [`value`],
/// [`boolean`], [`list`] or [`custom`], and can then be adjusted with
/// [`TypedValue::metavar`] and [`TypedValue::nargs`].
pub trait Value: Debug {
    /// Runs the action for this value on `raw`, which holds every consumed argument joined by
    /// `'\n'`. `key` is the option as it was written on the command line.
    fn parse(&mut self, key: &str, raw: &str) -> Result<(), InvalidValue>;

    /// Returns true if [`parse`](Value::parse) has succeeded since the last reset.
    fn is_active(&self) -> bool;

    /// Forgets any stored value. A bound target keeps whatever was last written to it.
    fn reset(&mut self);

    /// The number of command line arguments this value consumes.
    fn nargs(&self) -> usize;

    /// The placeholder shown in help output.
    fn metavar(&self) -> &str;

    fn clone_value(&self) -> Box<dyn Value>;

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Value> {
    fn clone(&self) -> Self {
        self.clone_value()
    }
}

type Action<T> = Rc<dyn Fn(&str, &str, Option<T>) -> Result<T, String>>;

/// A [`Value`] producing a `T`.
///
/// The action receives the option key, the raw text and, when the option has already been seen
/// during this parse, the previously produced value. This is what lets [`compose`] accumulate.
pub struct TypedValue<T> {
    action: Action<T>,
    value: Option<T>,
    binding: Option<Rc<RefCell<T>>>,
    active: bool,
    nargs: usize,
    metavar: String,
}

impl<T: Clone + 'static> TypedValue<T> {
    fn new(action: impl Fn(&str, &str, Option<T>) -> Result<T, String> + 'static) -> Self {
        TypedValue {
            action: Rc::new(action),
            value: None,
            binding: None,
            active: false,
            nargs: 1,
            metavar: String::from("value"),
        }
    }

    /// Sets the placeholder shown in help output.
    pub fn metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = metavar.into();
        self
    }

    /// Sets the number of arguments consumed.
    pub fn nargs(mut self, nargs: usize) -> Self {
        self.nargs = nargs;
        self
    }

    /// Returns the parsed value, reading through the binding when there is one.
    pub fn get(&self) -> Option<T> {
        if !self.active {
            return None;
        }
        match &self.binding {
            Some(binding) => Some(binding.borrow().clone()),
            None => self.value.clone(),
        }
    }

    pub fn get_or(&self, default: T) -> T {
        self.get().unwrap_or(default)
    }
}

impl<T: Clone + 'static> Value for TypedValue<T> {
    fn parse(&mut self, key: &str, raw: &str) -> Result<(), InvalidValue> {
        let previous = if !self.active {
            None
        } else if let Some(binding) = &self.binding {
            Some(binding.borrow().clone())
        } else {
            self.value.clone()
        };

        let result = (self.action)(key, raw, previous).map_err(|reason| InvalidValue {
            option: key.to_owned(),
            value: raw.to_owned(),
            reason,
        })?;

        match &self.binding {
            Some(binding) => *binding.borrow_mut() = result,
            None => self.value = Some(result),
        }
        self.active = true;
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.active = false;
        self.value = None;
    }

    fn nargs(&self) -> usize {
        self.nargs
    }

    fn metavar(&self) -> &str {
        &self.metavar
    }

    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Clone> Clone for TypedValue<T> {
    fn clone(&self) -> Self {
        TypedValue {
            action: Rc::clone(&self.action),
            value: self.value.clone(),
            binding: self.binding.clone(),
            active: self.active,
            nargs: self.nargs,
            metavar: self.metavar.clone(),
        }
    }
}

impl<T> Debug for TypedValue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedValue")
            .field("type", &type_name::<T>())
            .field("active", &self.active)
            .field("bound", &self.binding.is_some())
            .field("nargs", &self.nargs)
            .field("metavar", &self.metavar)
            .finish()
    }
}

/// Parses `raw` with [`FromStr`], turning the error into its message.
pub fn store<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|error: T::Err| error.to_string())
}

/// Accepts `1`, `true`, `0` and `false`.
pub fn store_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(format!("expected one of 1, true, 0 or false, found '{raw}'")),
    }
}

/// A single argument parsed with [`FromStr`].
///
/// # Examples
/// ```
/// # use gears::optparse::{Opt, OptionParser, value};
/// let mut parser = OptionParser::new();
/// parser.add(Opt::new("level").alias('l').value(value::<u8>()));
///
/// let args = parser.raw_parse(["prog", "--level", "3"]).unwrap();
/// assert_eq!(args.options.get::<u8>("level"), Ok(3));
/// ```
pub fn value<T>() -> TypedValue<T>
where
    T: FromStr + Clone + 'static,
    T::Err: Display,
{
    TypedValue::new(|_, raw, _| store(raw))
}

/// A single argument that must be `1`, `true`, `0` or `false`.
pub fn boolean() -> TypedValue<bool> {
    TypedValue::new(|_, raw, _| store_bool(raw))
}

/// Like [`value`], but the result is written into `target` instead of being kept by the option.
pub fn bind_to<T>(target: Rc<RefCell<T>>) -> TypedValue<T>
where
    T: FromStr + Clone + 'static,
    T::Err: Display,
{
    TypedValue {
        binding: Some(target),
        ..value()
    }
}

/// A value that takes no arguments and always produces `constant`.
pub fn constant<T: Clone + 'static>(constant: T) -> TypedValue<T> {
    TypedValue::new(move |_, _, _| Ok(constant.clone())).nargs(0)
}

/// Exactly `nargs` arguments, each parsed with [`FromStr`].
pub fn list<T>(nargs: usize) -> TypedValue<Vec<T>>
where
    T: FromStr + Clone + 'static,
    T::Err: Display,
{
    TypedValue::new(|_, raw, _| raw.split('\n').map(store).collect()).nargs(nargs)
}

/// One argument per occurrence, with every occurrence appended to the same list.
pub fn compose<T>() -> TypedValue<Vec<T>>
where
    T: FromStr + Clone + 'static,
    T::Err: Display,
{
    TypedValue::new(|_, raw, previous: Option<Vec<T>>| {
        let mut values = previous.unwrap_or_default();
        values.push(store(raw)?);
        Ok(values)
    })
}

/// A value produced by a user supplied function of the key and the raw argument text.
pub fn custom<T, E, F>(action: F) -> TypedValue<T>
where
    T: Clone + 'static,
    E: Display,
    F: Fn(&str, &str) -> Result<T, E> + 'static,
{
    TypedValue::new(move |key, raw, _| action(key, raw).map_err(|error| error.to_string()))
}
