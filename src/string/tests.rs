#![cfg(test)]

use super::*;

#[test]
fn test_case() {
    assert_eq!(to_lower("HELLO wOrLD"), "hello world");
    assert_eq!(to_upper("hello world"), "HELLO WORLD");
    assert!(is_all_lower("hello world"));
    assert!(is_all_upper("HELLO WORLD"));
    assert!(
        is_all_lower("hello, world 42!"),
        "Characters without case should be ignored."
    );
    assert!(!is_all_upper("HELLO wORLD"));
}

#[test]
fn test_predicates() {
    assert!(iequal("hello", "HELLO"));
    assert!(!iequal("hello", "HELLO!"));
    assert!(starts_with("Hello World", "Hello"));
    assert!(istarts_with("HELLO world", "hello"));
    assert!(ends_with("Hello World", "World"));
    assert!(iends_with("Hello World", "WoRLd"));
    assert!(contains("Hello World", "World"));
    assert!(icontains("Hello World", "Lo WoRL"));
    assert!(all("i3aa34", is_any_of("i3a4")));
    assert!(!all("i3ab34", is_any_of("i3a4")));
}

#[test]
fn test_replace() {
    let test = "Hello Hello Hello";

    assert_eq!(replace_first(test, "Hello", "Bye"), "Bye Hello Hello");
    assert_eq!(replace_last(test, "Hello", "Bye"), "Hello Hello Bye");
    assert_eq!(replace_nth(test, 1, "Hello", "Bye"), "Hello Bye Hello");
    assert_eq!(replace_all(test, "Hello", "Bye"), "Bye Bye Bye");
    assert_eq!(
        replace_nth(test, 3, "Hello", "Bye"),
        test,
        "Replacing a missing occurrence should change nothing."
    );
    assert_eq!(replace_all(test, "", "Bye"), test, "An empty pattern should never match.");

    assert_eq!(erase_first(test, "Hello"), " Hello Hello");
    assert_eq!(erase_last(test, "Hello"), "Hello Hello ");
    assert_eq!(erase_nth(test, 1, "Hello"), "Hello  Hello");
    assert_eq!(erase_all(test, "Hello"), "  ");
}

#[test]
fn test_find() {
    assert_eq!(find_first_of("Hello", is_any_of("lo")), Some(2));
    assert_eq!(find_first_of("Hello", is_any_of("a")), None);
    assert_eq!(find_first_not_of("Hello There", is_any_of("HeloThr")), Some(5));
    assert_eq!(find_last_of("Hello", is_any_of("l")), Some(3));
    assert_eq!(find_last_not_of(" Hello ", is_any_of(" ")), Some(5));
    assert_eq!(
        find_first_of("héllo", is_any_of("l")),
        Some(3),
        "Indices should be in bytes."
    );
}

#[test]
fn test_trim() {
    let test = "  Hello  ";
    assert_eq!(trim_left(test), "Hello  ");
    assert_eq!(trim_right(test), "  Hello");
    assert_eq!(trim(test), "Hello");
    assert_eq!(trim_if("xxHixx", is_any_of("x")), "Hi");
    assert_eq!(trim_left_if("0042", |c| c == '0'), "42");
    assert_eq!(trim_right_if("42!!", |c| c == '!'), "42");
}

#[test]
fn test_transforms() {
    let v = [1, 2, 3, 4, 5];

    assert_eq!(right("abcdef", 4), "cdef");
    assert_eq!(right("abcdef", 10), "abcdef");
    assert_eq!(left("abcdef", 4), "abcd");
    assert_eq!(left("abcdef", 10), "abcdef");
    assert_eq!(left("héllo", 2), "hé", "Lengths should be counted in characters.");
    assert_eq!(reverse("abcdef"), "fedcba");
    assert_eq!(join(v, ", "), "1, 2, 3, 4, 5");
    assert_eq!(join_if(v, ", ", |x| *x < 3), "1, 2");
    assert_eq!(join(Vec::<i32>::new(), ", "), "");
    assert_eq!(split("a, b, c, d", ", "), ["a", "b", "c", "d"]);
}

#[test]
fn test_sprint() {
    assert_eq!(
        sprint("{0} + {0} = {1}", &[&2, &4]),
        Ok(String::from("2 + 2 = 4")),
        "Placeholders can repeat."
    );
    assert_eq!(
        sprint("{1}, {0}!", &[&"world", &"Hello"]),
        Ok(String::from("Hello, world!"))
    );
    assert_eq!(
        sprint("{} and { stay, {0}", &[&1.5]),
        Ok(String::from("{} and { stay, 1.5")),
        "Braces that don't form a placeholder should be copied through."
    );
    assert_eq!(sprint("{name} {12", &[&0]), Ok(String::from("{name} {12")));
    assert_eq!(sprint("trailing {", &[&0]), Ok(String::from("trailing {")));
    assert_eq!(sprint("{{0}}", &[&'x']), Ok(String::from("{x}")));
    assert_eq!(
        sprint("{0} {3}", &[&"a", &"b"]),
        Err(MissingArgument { index: 3, len: 2 })
    );
    assert_eq!(
        sprint("{0}", &[]),
        Ok(String::from("{0}")),
        "Without arguments the text should be returned unchanged."
    );
}
