//! Substitution of substrings. Every function returns a new [`String`] and leaves its input
//! alone. An empty pattern never matches.

/// Replaces the first occurrence of `from` with `to`.
///
/// # Examples
/// ```
/// # use gears::string::replace_first;
/// assert_eq!(replace_first("Hello Hello", "Hello", "Bye"), "Bye Hello");
/// ```
pub fn replace_first(s: &str, from: &str, to: &str) -> String {
    replace_nth(s, 0, from, to)
}

/// Replaces the last occurrence of `from` with `to`.
pub fn replace_last(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_owned();
    }
    match s.rfind(from) {
        Some(index) => splice(s, index, from.len(), to),
        None => s.to_owned(),
    }
}

/// Replaces the occurrence of `from` at zero-based position `n` among the non-overlapping
/// matches.
pub fn replace_nth(s: &str, n: usize, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_owned();
    }
    match s.match_indices(from).nth(n) {
        Some((index, _)) => splice(s, index, from.len(), to),
        None => s.to_owned(),
    }
}

pub fn replace_all(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_owned();
    }
    s.replace(from, to)
}

pub fn erase_first(s: &str, pattern: &str) -> String {
    replace_first(s, pattern, "")
}

pub fn erase_last(s: &str, pattern: &str) -> String {
    replace_last(s, pattern, "")
}

pub fn erase_nth(s: &str, n: usize, pattern: &str) -> String {
    replace_nth(s, n, pattern, "")
}

pub fn erase_all(s: &str, pattern: &str) -> String {
    replace_all(s, pattern, "")
}

fn splice(s: &str, index: usize, len: usize, replacement: &str) -> String {
    let mut result = String::with_capacity(s.len() - len + replacement.len());
    result.push_str(&s[..index]);
    result.push_str(replacement);
    result.push_str(&s[index + len..]);
    result
}
