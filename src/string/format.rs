use std::fmt;

use derive_more::{Display, Error};

/// The error returned when a placeholder refers past the end of the provided arguments.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("placeholder {{{index}}} refers to a missing argument, only {len} were provided")]
pub struct MissingArgument {
    pub index: usize,
    pub len: usize,
}

/// Replaces every `{N}` placeholder in `text` with the [`Display`](fmt::Display) output of `args[N]`.
///
/// Placeholders may repeat and appear in any order. A `{` that does not start a complete
/// placeholder, such as a lone `{`, `{}` or `{name}`, is copied through as is. If `args` is empty,
/// `text` is returned unchanged.
///
/// # Errors
/// Returns [`MissingArgument`] for the first placeholder whose index is out of range.
///
/// # Examples
/// ```
/// # use gears::string::sprint;
/// assert_eq!(sprint("{1} {0}{}", &[&"world", &"hello"]), Ok(String::from("hello world{}")));
/// assert!(sprint("{2}", &[&1, &2]).is_err());
/// ```
pub fn sprint(text: &str, args: &[&dyn fmt::Display]) -> Result<String, MissingArgument> {
    if args.is_empty() {
        return Ok(text.to_owned());
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 || !after[digits..].starts_with('}') {
            output.push('{');
            rest = after;
            continue;
        }

        // Too many digits to fit a usize can't name an argument either.
        let index = after[..digits].parse().unwrap_or(usize::MAX);
        let arg = args.get(index).ok_or(MissingArgument {
            index,
            len: args.len(),
        })?;
        output.push_str(&arg.to_string());
        rest = &after[digits + 1..];
    }

    output.push_str(rest);
    Ok(output)
}
