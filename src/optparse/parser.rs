use std::process;

use log::{debug, trace};

use super::{
    Arguments, DefaultFormatter, HelpFormatter, InvalidSubcommand, Key, MissingRequiredValue,
    Opt, OptParseError, OptionSet, OptionTakesNoValue, ParseError, ShortOptionValueCombined,
    Subcommand, UnrecognisedOption,
};

/// Which option set the scan is currently matching against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    GlobalOptions,
    SubcommandOptions(usize),
}

/// A command line parser holding a global [`OptionSet`] and any number of [`Subcommand`]s.
///
/// Scanning follows the usual POSIX conventions:
/// - `--name`, `--name=value` and `--name value...` for long options;
/// - `-abc` for a group of short switches, `-t value...` or `-t=value` for a short option with
///   a value, which must then be the last in its group;
/// - `--` to end option scanning.
///
/// The first token that is not an option ends option scanning, it and everything after it are
/// positional arguments. If subcommands are registered, the first token after the program name
/// may instead select one, making its option set the active one for the rest of the scan.
///
/// # Examples
/// ```
/// # use gears::optparse::{Opt, OptionParser, Subcommand, value};
/// let mut parser = OptionParser::new();
/// parser.add(Opt::new("verbose").alias('v'));
/// parser.add_subcommand(
///     Subcommand::new("run").option(Opt::new("jobs").alias('j').value(value::<u32>())),
/// );
///
/// let args = parser.raw_parse(["prog", "run", "-j", "4", "target"]).unwrap();
/// assert_eq!(args.subcommand.as_deref(), Some("run"));
/// assert_eq!(args.options.get::<u32>('j'), Ok(4));
/// assert_eq!(args.positional, ["target"]);
/// ```
#[derive(Debug)]
pub struct OptionParser {
    pub program_name: String,
    pub usage: String,
    pub description: String,
    pub epilogue: String,
    options: OptionSet,
    subcommands: Vec<Subcommand>,
    formatter: Box<dyn HelpFormatter>,
    state: ScanState,
}

impl OptionParser {
    pub fn new() -> OptionParser {
        OptionParser::from(OptionSet::new())
    }

    /// Adds a global option, see [`OptionSet::add`].
    pub fn add(&mut self, opt: Opt) -> &mut Opt {
        self.options.add(opt)
    }

    pub fn add_subcommand(&mut self, subcommand: Subcommand) -> &mut OptionParser {
        self.subcommands.push(subcommand);
        self
    }

    /// Replaces the formatter used for help output.
    pub fn help_formatter(&mut self, formatter: impl HelpFormatter + 'static) -> &mut OptionParser {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn subcommands(&self) -> &[Subcommand] {
        &self.subcommands
    }

    pub fn active_subcommand(&self) -> Option<&Subcommand> {
        match self.state {
            ScanState::GlobalOptions => None,
            ScanState::SubcommandOptions(index) => self.subcommands.get(index),
        }
    }

    /// The option set that the last parse matched against.
    pub fn active_options(&self) -> &OptionSet {
        self.active_subcommand()
            .map_or(&self.options, |subcommand| &subcommand.options)
    }

    fn active_options_mut(&mut self) -> &mut OptionSet {
        match self.state {
            ScanState::GlobalOptions => &mut self.options,
            ScanState::SubcommandOptions(index) => &mut self.subcommands[index].options,
        }
    }

    /// Parses `args`, the first of which is the program name.
    ///
    /// Every call starts from a clean slate, options from a previous parse are deactivated and
    /// the global option set becomes active again. Required options are not checked here, see
    /// [`notify`](OptionParser::notify).
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered, along with the program name.
    pub fn raw_parse<I, S>(&mut self, args: I) -> Result<Arguments<'_>, OptParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positional = self.scan(args)?;
        Ok(self.arguments(positional))
    }

    /// Like [`raw_parse`](OptionParser::raw_parse), but handles the outcome the way a command
    /// line program usually wants to.
    ///
    /// If the parse succeeds and a `help` option is active, the help text is printed and the
    /// process exits successfully. If the parse fails, the usage line and the error are printed
    /// to stderr and the process exits with status 1.
    pub fn parse<I, S>(&mut self, args: I) -> Arguments<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.scan(args) {
            Ok(positional) => {
                if self.active_options().is_active("help") {
                    print!("{}", self.format_help());
                    process::exit(0);
                }
                self.arguments(positional)
            }
            Err(error) => {
                eprint!("{}", self.format_usage());
                eprintln!("{error}");
                process::exit(1);
            }
        }
    }

    /// Checks that every required option of the active set was given.
    ///
    /// # Errors
    /// Returns a [`MissingRequiredOption`](super::MissingRequiredOption) for the first required
    /// option that was not.
    pub fn notify(&self) -> Result<(), OptParseError> {
        self.active_options()
            .check_required()
            .map_err(|error| self.error(error.into()))
    }

    /// Another name for [`notify`](OptionParser::notify).
    pub fn check_required_args(&self) -> Result<(), OptParseError> {
        self.notify()
    }

    pub fn format_usage(&self) -> String {
        let (subcommand, usage) = match self.active_subcommand() {
            Some(subcommand) => (Some(subcommand.name.as_str()), subcommand.usage.as_str()),
            None => (None, self.usage.as_str()),
        };
        self.formatter.usage(&self.program_name, subcommand, usage)
    }

    pub fn format_description(&self) -> String {
        let description = self
            .active_subcommand()
            .map_or(&self.description, |subcommand| &subcommand.description);
        self.formatter.description(description)
    }

    /// Lists the subcommands, unless one of them is active.
    pub fn format_subcommands(&self) -> String {
        match self.state {
            ScanState::GlobalOptions => self.formatter.subcommands(&self.subcommands),
            ScanState::SubcommandOptions(_) => String::new(),
        }
    }

    pub fn format_options(&self) -> String {
        self.formatter.options(self.active_options())
    }

    pub fn format_epilogue(&self) -> String {
        let epilogue = self
            .active_subcommand()
            .map_or(&self.epilogue, |subcommand| &subcommand.epilogue);
        self.formatter.epilogue(epilogue)
    }

    /// The complete help text for the active option set, with a blank line between sections.
    pub fn format_help(&self) -> String {
        [
            self.format_usage(),
            self.format_description(),
            self.format_subcommands(),
            self.format_options(),
            self.format_epilogue(),
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }

    fn arguments(&self, positional: Vec<String>) -> Arguments<'_> {
        Arguments {
            options: self.active_options(),
            positional,
            subcommand: self
                .active_subcommand()
                .map(|subcommand| subcommand.name.clone()),
        }
    }

    fn error(&self, error: ParseError) -> OptParseError {
        OptParseError {
            program: self.program_name.clone(),
            error,
        }
    }

    fn reset(&mut self) {
        self.state = ScanState::GlobalOptions;
        self.options.reset();
        for subcommand in &mut self.subcommands {
            subcommand.options.reset();
        }
    }

    fn scan<I, S>(&mut self, args: I) -> Result<Vec<String>, OptParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reset();

        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        let Some((program, tokens)) = tokens.split_first() else {
            return Ok(Vec::new());
        };
        if self.program_name.is_empty() {
            self.program_name.clone_from(program);
        }

        let positional = self.scan_tokens(tokens).map_err(|error| self.error(error))?;
        debug!("parsed {} positional arguments", positional.len());
        Ok(positional)
    }

    fn scan_tokens(&mut self, tokens: &[String]) -> Result<Vec<String>, ParseError> {
        let mut index = self.select_subcommand(tokens)?;

        while let Some(token) = tokens.get(index) {
            if token == "--" {
                trace!("found separator at {index}");
                index += 1;
                break;
            } else if !is_option(token) {
                trace!("found first positional argument {token:?} at {index}");
                break;
            }

            index = if token.starts_with("--") {
                trace!("scanning long option {token:?}");
                self.scan_long(tokens, index)?
            } else {
                trace!("scanning short option group {token:?}");
                self.scan_short(tokens, index)?
            };
            index += 1;
        }

        Ok(tokens[index.min(tokens.len())..].to_vec())
    }

    fn select_subcommand(&mut self, tokens: &[String]) -> Result<usize, ParseError> {
        let Some(first) = tokens.first() else {
            return Ok(0);
        };
        if self.subcommands.is_empty() || first.is_empty() || is_option(first) {
            return Ok(0);
        }

        match self.subcommands.iter().position(|sub| sub.name == *first) {
            Some(index) => {
                debug!("switching to options of subcommand {first:?}");
                self.state = ScanState::SubcommandOptions(index);
                Ok(1)
            }
            None => Err(InvalidSubcommand {
                name: first.clone(),
            }
            .into()),
        }
    }

    /// Handles the long option at `tokens[index]`, returning the index of the last token it
    /// consumed.
    fn scan_long(&mut self, tokens: &[String], index: usize) -> Result<usize, ParseError> {
        let token = &tokens[index];
        let (key, explicit) = match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token.as_str(), None),
        };

        let opt = self
            .active_options_mut()
            .find_mut(Key::Long(&key[2..]))
            .ok_or_else(|| UnrecognisedOption {
                option: key.to_owned(),
            })?;

        let (value, last) = take_value(opt, key, explicit, tokens, index)?;
        opt.activate(key, &value)?;
        Ok(last)
    }

    /// Handles the group of short options at `tokens[index]`, returning the index of the last
    /// token consumed.
    fn scan_short(&mut self, tokens: &[String], index: usize) -> Result<usize, ParseError> {
        let token = &tokens[index];
        let chars: Vec<char> = token.chars().collect();
        let mut last = index;

        for position in 1..chars.len() {
            let alias = chars[position];
            let key = Key::Short(alias).to_string();
            let explicit: Option<String> = match chars.get(position + 1..) {
                Some(['=', rest @ ..]) if !rest.is_empty() => Some(rest.iter().collect()),
                _ => None,
            };

            let opt = self
                .active_options_mut()
                .find_mut(Key::Short(alias))
                .ok_or_else(|| UnrecognisedOption {
                    option: key.clone(),
                })?;

            if explicit.is_none() && opt.takes_value() && position + 1 != chars.len() {
                return Err(ShortOptionValueCombined {
                    option: key,
                    argument: token.clone(),
                }
                .into());
            }

            let (value, consumed) = take_value(opt, &key, explicit.as_deref(), tokens, index)?;
            opt.activate(&key, &value)?;
            last = consumed;

            if explicit.is_some() {
                break;
            }
        }

        Ok(last)
    }
}

impl Default for OptionParser {
    fn default() -> Self {
        OptionParser::new()
    }
}

impl From<OptionSet> for OptionParser {
    fn from(options: OptionSet) -> Self {
        OptionParser {
            program_name: String::new(),
            usage: String::from("[options...]"),
            description: String::new(),
            epilogue: String::new(),
            options,
            subcommands: Vec::new(),
            formatter: Box::new(DefaultFormatter::default()),
            state: ScanState::default(),
        }
    }
}

fn is_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Works out the raw value for `opt`, from `explicit` if the option was written with `=value`,
/// or otherwise from the tokens following `index`. Returns the value and the index of the last
/// token used.
fn take_value(
    opt: &Opt,
    key: &str,
    explicit: Option<&str>,
    tokens: &[String],
    index: usize,
) -> Result<(String, usize), ParseError> {
    match explicit {
        Some(_) if !opt.takes_value() => Err(OptionTakesNoValue {
            option: key.to_owned(),
        }
        .into()),
        Some(value) => Ok((value.to_owned(), index)),
        None => {
            let nargs = opt.nargs();
            if tokens.len() - index - 1 < nargs {
                return Err(MissingRequiredValue {
                    option: key.to_owned(),
                    nargs,
                }
                .into());
            }
            Ok((tokens[index + 1..=index + nargs].join("\n"), index + nargs))
        }
    }
}
