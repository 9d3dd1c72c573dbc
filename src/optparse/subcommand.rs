use super::{Opt, OptionSet};

/// A named group of options, selected by the first argument after the program name.
#[derive(Debug, Clone)]
pub struct Subcommand {
    pub name: String,
    pub description: String,
    pub help: String,
    pub usage: String,
    pub epilogue: String,
    pub options: OptionSet,
}

impl Subcommand {
    pub fn new(name: impl Into<String>) -> Subcommand {
        Subcommand {
            name: name.into(),
            description: String::new(),
            help: String::new(),
            usage: String::from("[options...]"),
            epilogue: String::new(),
            options: OptionSet::new(),
        }
    }

    /// The one line summary shown in the parent's subcommand list.
    pub fn help(mut self, help: impl Into<String>) -> Subcommand {
        self.help = help.into();
        self
    }

    /// The longer text shown in this subcommand's own help.
    pub fn description(mut self, description: impl Into<String>) -> Subcommand {
        self.description = description.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Subcommand {
        self.usage = usage.into();
        self
    }

    pub fn epilogue(mut self, epilogue: impl Into<String>) -> Subcommand {
        self.epilogue = epilogue.into();
        self
    }

    pub fn option(mut self, opt: Opt) -> Subcommand {
        self.options.add(opt);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = Opt>) -> Subcommand {
        self.options.extend(options);
        self
    }
}

/// The result of a successful parse.
#[derive(Debug)]
pub struct Arguments<'a> {
    /// The option set that was active at the end of the parse, either the global one or the
    /// selected subcommand's.
    pub options: &'a OptionSet,
    /// Every argument left over after option scanning stopped.
    pub positional: Vec<String>,
    pub subcommand: Option<String>,
}
