/// Returns a lowercase copy of `s`.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Returns an uppercase copy of `s`.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Returns true if every alphabetic character in `s` is lowercase. Characters without case, such
/// as digits, spaces and punctuation, are ignored.
pub fn is_all_lower(s: &str) -> bool {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_lowercase)
}

/// Returns true if every alphabetic character in `s` is uppercase. Characters without case are
/// ignored.
pub fn is_all_upper(s: &str) -> bool {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase)
}
