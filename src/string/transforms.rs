use std::fmt::Display;

/// Returns the first `n` characters of `s`, or all of `s` if it is shorter.
///
/// # Examples
/// ```
/// # use gears::string::{left, right};
/// assert_eq!(left("abcdef", 4), "abcd");
/// assert_eq!(right("abcdef", 4), "cdef");
/// assert_eq!(right("abcdef", 10), "abcdef");
/// ```
pub fn left(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(index, _)| &s[..index])
}

/// Returns the last `n` characters of `s`, or all of `s` if it is shorter.
pub fn right(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if n >= count {
        return s;
    }
    s.char_indices()
        .nth(count - n)
        .map_or(s, |(index, _)| &s[index..])
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Joins the display form of every item with `separator`.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_if(items, separator, |_| true)
}

/// Like [`join`], but only with the items that satisfy `predicate`.
pub fn join_if<I, P>(items: I, separator: &str, mut predicate: P) -> String
where
    I: IntoIterator,
    I::Item: Display,
    P: FnMut(&I::Item) -> bool,
{
    let mut result = String::new();
    for (i, item) in items.into_iter().filter(|item| predicate(item)).enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(&item.to_string());
    }
    result
}

/// Splits `s` on every occurrence of `separator`. An empty separator yields `s` whole.
pub fn split<'a>(s: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![s];
    }
    s.split(separator).collect()
}
