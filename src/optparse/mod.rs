//! A command line option parser with typed values and subcommands.
//!
//! Options are declared with [`Opt`], collected into an [`OptionSet`] and scanned by an
//! [`OptionParser`]. The way an option's arguments are interpreted is decided by its [`Value`],
//! created through one of the functions in this module ([`value`], [`boolean`], [`bind_to`],
//! [`constant`], [`list`], [`compose`] or [`custom`]). After a parse, the values are looked up
//! by long name or alias through [`Arguments::options`].
//!
//! # Examples
//! ```
//! # use gears::optparse::{Opt, OptionParser, constant, list};
//! let mut parser = OptionParser::new();
//! parser.add(Opt::new("verbose").alias('v').help("print more"));
//! parser.add(Opt::short('f').value(constant(42)));
//! parser.add(Opt::new("point").value(list::<i32>(2).metavar("x y")));
//!
//! let args = parser.raw_parse(["prog", "-vf", "--point", "3", "4", "input"]).unwrap();
//! assert!(args.options.is_active("verbose"));
//! assert_eq!(args.options.get::<i32>('f'), Ok(42));
//! assert_eq!(args.options.get::<Vec<i32>>("point"), Ok(vec![3, 4]));
//! assert_eq!(args.positional, ["input"]);
//! ```

mod error;
mod formatter;
mod option;
mod option_set;
mod parser;
mod subcommand;
mod value;

pub use error::*;
pub use formatter::*;
pub use option::*;
pub use option_set::*;
pub use parser::*;
pub use subcommand::*;
pub use value::*;
