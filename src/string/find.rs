/// Returns the byte index of the first character of `s` that satisfies `predicate`.
///
/// # Examples
/// ```
/// # use gears::string::{find_first_of, is_any_of};
/// assert_eq!(find_first_of("Hello", is_any_of("lo")), Some(2));
/// assert_eq!(find_first_of("Hello", is_any_of("a")), None);
/// ```
pub fn find_first_of(s: &str, predicate: impl Fn(char) -> bool) -> Option<usize> {
    s.find(predicate)
}

/// Returns the byte index of the first character of `s` that does not satisfy `predicate`.
pub fn find_first_not_of(s: &str, predicate: impl Fn(char) -> bool) -> Option<usize> {
    s.find(|c: char| !predicate(c))
}

/// Returns the byte index of the last character of `s` that satisfies `predicate`.
pub fn find_last_of(s: &str, predicate: impl Fn(char) -> bool) -> Option<usize> {
    s.rfind(predicate)
}

/// Returns the byte index of the last character of `s` that does not satisfy `predicate`.
pub fn find_last_not_of(s: &str, predicate: impl Fn(char) -> bool) -> Option<usize> {
    s.rfind(|c: char| !predicate(c))
}
