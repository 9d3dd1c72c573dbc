use std::env;
use std::process::ExitCode;

use derive_more::{Display, Error, From};
use gears::math::uintx::{DivisionByZero, ParseUIntXError, SubtractionUnderflow};
use gears::math::{UIntX, factorial, fibonacci};
use gears::optparse::{Opt, OptionParser, Subcommand};
use gears::utility::{InvalidBase64, base64};
use log::{LevelFilter, debug};

#[derive(Debug, Display, Error, From)]
enum CommandError {
    #[display("expected {expected} arguments, found {found}")]
    #[from(ignore)]
    ArgumentCount { expected: usize, found: usize },
    ParseUIntX(ParseUIntXError),
    DivisionByZero(DivisionByZero),
    SubtractionUnderflow(SubtractionUnderflow),
    InvalidBase64(InvalidBase64),
}

/// Options accepted by every subcommand.
fn common_options() -> [Opt; 2] {
    [
        Opt::new("help").alias('h').help("show this help message and exit"),
        Opt::new("verbose").alias('v').help("log what is being computed"),
    ]
}

fn arithmetic(name: &str, help: &str) -> Subcommand {
    Subcommand::new(name)
        .help(help)
        .usage("[options...] <a> <b>")
        .options(common_options())
}

fn parser() -> OptionParser {
    let mut parser = OptionParser::new();
    parser.description = String::from("Arbitrary precision arithmetic and encoding tools.");
    parser.usage = String::from("<subcommand> [options...] [args...]");
    parser.epilogue = String::from("Use '<subcommand> --help' for help on a subcommand.");
    parser.add(Opt::new("help").alias('h').help("show this help message and exit"));

    parser
        .add_subcommand(arithmetic("add", "print a + b"))
        .add_subcommand(arithmetic("sub", "print a - b"))
        .add_subcommand(arithmetic("mul", "print a * b"))
        .add_subcommand(arithmetic("div", "print a / b"))
        .add_subcommand(arithmetic("rem", "print a % b"))
        .add_subcommand(
            Subcommand::new("fib")
                .help("print the nth Fibonacci number")
                .usage("[options...] <n>")
                .options(common_options()),
        )
        .add_subcommand(
            Subcommand::new("factorial")
                .help("print n!")
                .usage("[options...] <n>")
                .options(common_options()),
        )
        .add_subcommand(
            Subcommand::new("base64")
                .help("encode or decode base64 text")
                .usage("[options...] <text>")
                .options(common_options())
                .option(Opt::new("decode").alias('d').help("decode instead of encoding")),
        );
    parser
}

fn operands<const N: usize>(positional: &[String]) -> Result<[&str; N], CommandError> {
    let found = positional.len();
    let strs: Vec<&str> = positional.iter().map(String::as_str).collect();
    strs.try_into()
        .map_err(|_| CommandError::ArgumentCount { expected: N, found })
}

fn run(command: &str, positional: &[String], decode: bool) -> Result<String, CommandError> {
    match command {
        "base64" => {
            let [text] = operands(positional)?;
            if decode {
                let bytes = base64::decode(text)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            } else {
                Ok(base64::encode(text))
            }
        }
        "fib" | "factorial" => {
            let [n] = operands(positional)?;
            let n: UIntX = n.parse()?;
            debug!("computing {command}({n})");
            Ok(match command {
                "fib" => fibonacci(n),
                _ => factorial(n),
            }
            .to_string())
        }
        _ => {
            let [a, b] = operands(positional)?;
            let (a, b): (UIntX, UIntX) = (a.parse()?, b.parse()?);
            debug!("computing {command}({a}, {b})");
            Ok(match command {
                "add" => a + b,
                "sub" => a.checked_sub(&b)?,
                "mul" => a * b,
                "div" => a.checked_div(&b)?,
                _ => a.checked_rem(&b)?,
            }
            .to_string())
        }
    }
}

/// Builds the logger from `RUST_LOG` style `filters`. Without any, this crate logs up to `debug`
/// and everything else only warnings.
fn logger(filters: Option<&str>) -> env_logger::Builder {
    let mut logger = env_logger::Builder::new();
    match filters {
        Some(filters) => logger.parse_filters(filters),
        None => logger
            .filter_level(LevelFilter::Warn)
            .filter_module("gears", LevelFilter::Debug),
    };
    logger
}

/// Installs the logger, which has to happen before parsing for the parser's trace to show up.
/// Without filters from the environment the maximum level starts at `warn`, until `--verbose`
/// raises it. Returns true if the filters came from the environment.
fn init_logging() -> bool {
    let filters = env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logger(filters.as_deref()).init();
    if filters.is_none() {
        log::set_max_level(LevelFilter::Warn);
    }
    filters.is_some()
}

fn main() -> ExitCode {
    let from_env = init_logging();

    let mut parser = parser();
    let args = parser.parse(env::args());
    let verbose = args.options.is_active("verbose");
    let decode = args.options.is_active("decode");
    let subcommand = args.subcommand.clone();
    let positional = args.positional.clone();

    if verbose && !from_env {
        log::set_max_level(LevelFilter::Debug);
    }

    let Some(command) = subcommand else {
        eprint!("{}", parser.format_help());
        return ExitCode::FAILURE;
    };

    match run(&command, &positional, decode) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {command}: error: {error}", parser.program_name);
            ExitCode::FAILURE
        }
    }
}
