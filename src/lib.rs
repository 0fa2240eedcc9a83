//! Declarative command-line option parsing.
//!
//! Options are registered up front with a spec string (`"long"` or
//! `"long,short"`), a type tag, a required flag and help text. Parsing then
//! rewrites short flags to long ones, converts every value to its declared
//! type, defaults absent booleans to `false` and checks required coverage.
//!
//! ```
//! use cmdopts::CmdLineParser;
//!
//! let mut parser = CmdLineParser::new();
//! parser.setup::<i32>("count,c", true, "How many").unwrap();
//! parser.setup::<bool>("verbose,v", false, "Chatty output").unwrap();
//!
//! let opts = parser.parse(["-c", "3", "--verbose"]).unwrap();
//! assert_eq!(opts.get::<i32>("count"), Ok(3));
//! assert_eq!(opts.get::<bool>("verbose"), Ok(true));
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod schema;
pub mod value;

pub use error::CmdError;
pub use parser::CmdLineParser;
pub use parser::errors::{ParseError, ParseErrorKind};
pub use registry::errors::RegistryError;
pub use registry::{OptionSpec, Registry};
pub use value::errors::AccessError;
pub use value::{FromValue, OptionType, Opts, Value, ValueType};
