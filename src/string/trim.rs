//! Trimming returns a subslice of the input, the input itself is never modified.

pub fn trim_left(s: &str) -> &str {
    trim_left_if(s, char::is_whitespace)
}

pub fn trim_right(s: &str) -> &str {
    trim_right_if(s, char::is_whitespace)
}

pub fn trim(s: &str) -> &str {
    trim_if(s, char::is_whitespace)
}

/// Removes every leading character satisfying `predicate`.
pub fn trim_left_if(s: &str, predicate: impl Fn(char) -> bool) -> &str {
    s.trim_start_matches(predicate)
}

/// Removes every trailing character satisfying `predicate`.
pub fn trim_right_if(s: &str, predicate: impl Fn(char) -> bool) -> &str {
    s.trim_end_matches(predicate)
}

pub fn trim_if(s: &str, predicate: impl Fn(char) -> bool) -> &str {
    trim_right_if(trim_left_if(s, &predicate), predicate)
}
