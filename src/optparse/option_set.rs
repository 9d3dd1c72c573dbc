use std::any::{Any, type_name};
use std::slice::Iter;

use super::{
    AsKey, BadValueCast, GetError, Key, MissingRequiredOption, NoSuchOption, Opt, TypedValue,
    ValueNotParsed,
};

/// An ordered collection of [`Opt`]s, where no two options share the same name and alias.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<Opt>,
}

impl OptionSet {
    pub const fn new() -> OptionSet {
        OptionSet {
            options: Vec::new(),
        }
    }

    /// Adds `opt` to the set and returns a reference to it. If an option with the same name and
    /// alias is already present, `opt` is dropped and the existing option is returned instead.
    pub fn add(&mut self, opt: Opt) -> &mut Opt {
        let index = match self
            .options
            .iter()
            .position(|existing| existing.name == opt.name && existing.alias == opt.alias)
        {
            Some(index) => index,
            None => {
                self.options.push(opt);
                self.options.len() - 1
            }
        };
        &mut self.options[index]
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Opt> {
        self.options.iter()
    }

    /// Finds the option named by `key`.
    pub fn find(&self, key: impl AsKey) -> Option<&Opt> {
        let key = key.as_key();
        self.options.iter().find(|opt| opt.is(key))
    }

    pub(crate) fn find_mut(&mut self, key: Key<'_>) -> Option<&mut Opt> {
        self.options.iter_mut().find(|opt| opt.is(key))
    }

    /// Returns true if the option named by `key` exists and was present in the last parse.
    pub fn is_active(&self, key: impl AsKey) -> bool {
        self.find(key).is_some_and(Opt::is_active)
    }

    /// Returns the value parsed for the option named by `key`.
    ///
    /// An option without a value answers `get::<bool>` with `true` once it has been seen.
    ///
    /// # Errors
    /// - [`NoSuchOption`] if no option matches `key`.
    /// - [`ValueNotParsed`] if the option was not present in the last parse.
    /// - [`BadValueCast`] if the option's value is not a `T`.
    pub fn get<T: Clone + 'static>(&self, key: impl AsKey) -> Result<T, GetError> {
        let key = key.as_key();
        let opt = self.find(key).ok_or_else(|| NoSuchOption {
            key: key.to_string(),
        })?;

        if !opt.is_active() {
            return Err(ValueNotParsed {
                key: key.to_string(),
            }
            .into());
        }

        let found = match opt.value_ref() {
            Some(value) => value
                .as_any()
                .downcast_ref::<TypedValue<T>>()
                .and_then(TypedValue::get),
            None => (&opt.is_active() as &dyn Any).downcast_ref::<T>().cloned(),
        };

        found.ok_or_else(|| {
            BadValueCast {
                key: key.to_string(),
                expected: type_name::<T>(),
            }
            .into()
        })
    }

    /// Like [`get`](OptionSet::get), but falls back to `default` on any error.
    pub fn get_or<T: Clone + 'static>(&self, key: impl AsKey, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Checks that every required option was present.
    ///
    /// # Errors
    /// Returns [`MissingRequiredOption`] for the first required option that is not active.
    pub fn check_required(&self) -> Result<(), MissingRequiredOption> {
        match self
            .options
            .iter()
            .find(|opt| opt.is_required() && !opt.is_active())
        {
            Some(opt) => Err(MissingRequiredOption {
                option: opt.display_key(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.options.iter_mut().for_each(Opt::reset);
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Opt;
    type IntoIter = Iter<'a, Opt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Opt> for OptionSet {
    fn from_iter<I: IntoIterator<Item = Opt>>(iter: I) -> Self {
        let mut set = OptionSet::new();
        for opt in iter {
            set.add(opt);
        }
        set
    }
}

impl Extend<Opt> for OptionSet {
    fn extend<I: IntoIterator<Item = Opt>>(&mut self, iter: I) {
        for opt in iter {
            self.add(opt);
        }
    }
}

impl<const N: usize> From<[Opt; N]> for OptionSet {
    fn from(value: [Opt; N]) -> Self {
        value.into_iter().collect()
    }
}
