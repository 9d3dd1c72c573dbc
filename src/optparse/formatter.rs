use std::fmt::Debug;

use super::{Opt, OptionSet, Subcommand};

/// Produces the sections of an [`OptionParser`](super::OptionParser)'s help text.
///
/// Every method has a default implementation, so a custom formatter only needs to provide a
/// [`column`](HelpFormatter::column) and override the sections it wants to change. Each section
/// is either empty or ends with a newline.
pub trait HelpFormatter: Debug {
    /// The width that text is wrapped to.
    fn column(&self) -> usize;

    /// Word wraps `text` so that no line reaches past `column() - 2`, indenting every line after
    /// the first by `indent` spaces. The first line is assumed to already start at `indent`.
    fn wrap(&self, text: &str, indent: usize) -> String {
        if text.is_empty() {
            return String::new();
        }

        let width = self.column().saturating_sub(2);
        if indent + text.len() <= width {
            return format!("{text}\n");
        }

        let mut result = String::new();
        let mut words = text.split_whitespace();
        if let Some(first) = words.next() {
            result.push_str(first);
            let mut remaining = width.saturating_sub(indent + first.len());

            for word in words {
                if word.len() < remaining {
                    result.push(' ');
                    result.push_str(word);
                    remaining -= word.len() + 1;
                } else {
                    result.push('\n');
                    result.push_str(&" ".repeat(indent));
                    result.push_str(word);
                    remaining = width.saturating_sub(indent + word.len());
                }
            }
        }
        result.push('\n');
        result
    }

    fn usage(&self, program: &str, subcommand: Option<&str>, usage: &str) -> String {
        let line = match subcommand {
            Some(subcommand) => format!("usage: {program} {subcommand} {usage}"),
            None => format!("usage: {program} {usage}"),
        };
        self.wrap(&line, 0)
    }

    fn description(&self, description: &str) -> String {
        self.wrap(description, 0)
    }

    fn epilogue(&self, epilogue: &str) -> String {
        self.wrap(epilogue, 0)
    }

    fn subcommands(&self, subcommands: &[Subcommand]) -> String {
        let Some(longest) = subcommands.iter().map(|sub| sub.name.len()).max() else {
            return String::new();
        };
        let indent = 8 + longest;

        let mut result = String::from("subcommands:\n");
        for sub in subcommands {
            let mut row = format!("    {}", sub.name);
            if sub.help.is_empty() {
                row.push('\n');
            } else {
                row.push_str(&" ".repeat(indent - row.len()));
                row.push_str(&self.wrap(&sub.help, indent));
            }
            result.push_str(&row);
        }
        result
    }

    fn options(&self, options: &OptionSet) -> String {
        let visible: Vec<&Opt> = options.iter().filter(|opt| !opt.is_hidden()).collect();
        let Some(longest_name) = visible.iter().map(|opt| opt.name.len()).max() else {
            return String::new();
        };
        let longest_metavar = visible
            .iter()
            .map(|opt| opt.metavar().len())
            .max()
            .unwrap_or(0);

        let mut indent = 14 + longest_name;
        if longest_metavar > 0 {
            indent += 5 + longest_metavar;
        }

        let mut result = String::from("options:\n");
        for opt in visible {
            let mut row = match (opt.alias, opt.name.is_empty()) {
                (Some(alias), false) => format!("    -{alias}, --{}", opt.name),
                (Some(alias), true) => format!("    -{alias}"),
                (None, _) => format!("        --{}", opt.name),
            };

            let metavar = opt.metavar();
            if !metavar.is_empty() {
                if opt.name.is_empty() {
                    row.push_str(&format!(" <{metavar}>"));
                } else {
                    row.push_str(&format!("[=<{metavar}>]"));
                }
            }

            if opt.help.is_empty() {
                row.push('\n');
            } else {
                row.push_str(&" ".repeat(indent.saturating_sub(row.len()).max(1)));
                row.push_str(&self.wrap(&opt.help, indent));
            }
            result.push_str(&row);
        }
        result
    }
}

/// Wraps help text at 80 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFormatter {
    pub column: usize,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        DefaultFormatter { column: 80 }
    }
}

impl HelpFormatter for DefaultFormatter {
    fn column(&self) -> usize {
        self.column
    }
}
