//! Comparisons between strings. The `i` prefixed variants ignore case by comparing the
//! lowercase forms of both strings.

pub fn iequal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn istarts_with(s: &str, prefix: &str) -> bool {
    s.to_lowercase().starts_with(&prefix.to_lowercase())
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

pub fn iends_with(s: &str, suffix: &str) -> bool {
    s.to_lowercase().ends_with(&suffix.to_lowercase())
}

pub fn contains(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

pub fn icontains(s: &str, needle: &str) -> bool {
    s.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns true if every character of `s` satisfies `predicate`.
pub fn all(s: &str, predicate: impl Fn(char) -> bool) -> bool {
    s.chars().all(predicate)
}

/// Creates a predicate matching any of the characters in `set`.
///
/// # Examples
/// ```
/// # use gears::string::{all, is_any_of};
/// assert!(all("i3aa34", is_any_of("i3a4")));
/// assert!(!all("i3ab34", is_any_of("i3a4")));
/// ```
pub fn is_any_of(set: &str) -> impl Fn(char) -> bool + '_ {
    move |c| set.contains(c)
}
