use std::any::{Any, type_name};
use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, Error};

/// The error returned when an [`AnyValue`] is empty or holds a different type than requested.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("bad any cast to {target}")]
pub struct BadAnyCast {
    pub target: &'static str,
}

impl BadAnyCast {
    fn of<T>() -> BadAnyCast {
        BadAnyCast {
            target: type_name::<T>(),
        }
    }
}

trait Object: Any {
    fn clone_box(&self) -> Box<dyn Object>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Clone + 'static> Object for T {
    fn clone_box(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A container for a single value of any cloneable type, or nothing at all.
///
/// Unlike a `Box<dyn Any>`, an `AnyValue` can be cloned, which deep copies the held value.
///
/// # Examples
/// ```
/// # use gears::utility::AnyValue;
/// let mut value = AnyValue::new(10_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.as_ref::<i32>(), Ok(&10));
/// assert!(value.as_ref::<String>().is_err());
///
/// let copy = value.clone();
/// *value.as_mut::<i32>().unwrap() += 1;
/// assert_eq!(copy.take::<i32>(), Ok(10));
/// ```
#[derive(Default)]
pub struct AnyValue {
    inner: Option<Box<dyn Object>>,
}

impl AnyValue {
    pub fn new<T: Clone + 'static>(value: T) -> AnyValue {
        AnyValue {
            inner: Some(Box::new(value)),
        }
    }

    pub const fn empty() -> AnyValue {
        AnyValue { inner: None }
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns true if the held value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| (**inner).as_any().is::<T>())
    }

    pub fn as_ref<T: 'static>(&self) -> Result<&T, BadAnyCast> {
        self.inner
            .as_ref()
            .and_then(|inner| (**inner).as_any().downcast_ref())
            .ok_or_else(BadAnyCast::of::<T>)
    }

    pub fn as_mut<T: 'static>(&mut self) -> Result<&mut T, BadAnyCast> {
        self.inner
            .as_mut()
            .and_then(|inner| (**inner).as_any_mut().downcast_mut())
            .ok_or_else(BadAnyCast::of::<T>)
    }

    /// Moves the held value out, if it is a `T`.
    pub fn take<T: 'static>(self) -> Result<T, BadAnyCast> {
        self.inner
            .and_then(|inner| inner.into_any().downcast().ok())
            .map(|boxed| *boxed)
            .ok_or_else(BadAnyCast::of::<T>)
    }

    /// Replaces the held value, returning the old one.
    pub fn replace<T: Clone + 'static>(&mut self, value: T) -> AnyValue {
        AnyValue {
            inner: self.inner.replace(Box::new(value)),
        }
    }

    pub fn clear(&mut self) {
        self.inner = None;
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        AnyValue {
            inner: self.inner.as_ref().map(|inner| (**inner).clone_box()),
        }
    }
}

impl Debug for AnyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(_) => write!(f, "AnyValue(..)"),
            None => write!(f, "AnyValue(<empty>)"),
        }
    }
}

/// Returns a clone of the `T` held in `value`.
pub fn any_cast<T: Clone + 'static>(value: &AnyValue) -> Result<T, BadAnyCast> {
    value.as_ref().cloned()
}
