//! Sift command-line options out of argument text.
//!
//! `argsift` matches registered options anywhere inside a flat argument
//! string, writes the parsed values into caller-supplied destinations,
//! and hands back the input with the consumed option text surgically
//! removed. Anything it does not recognize passes through untouched:
//! an absent option is not an error, and a value that does not convert
//! is dropped silently in favor of leniency.
//!
//! The grammar covers bare flags, `--opt=value`, `--opt: value`,
//! space-separated values, `--no-` negation of long flags, and bundled
//! short flags (`-xvf`). Destinations are either borrowed slots of any
//! [`FromStr`](std::str::FromStr) type or [`Callback`]s taking up to two
//! derived arguments.
//!
//! # Example
//!
//! ```
//! use argsift::Parser;
//!
//! let mut verbose = false;
//! let mut sleep = false;
//! let mut jobs = 0u32;
//!
//! let mut parser = Parser::new();
//! parser
//!     .flag("verbose|v", &mut verbose)
//!     .flag("sleep|s", &mut sleep)
//!     .option("jobs|j", &mut jobs);
//!
//! let residual = parser.parse(["check", "-vs", "--jobs", "4", "src/lib.rs"]);
//! drop(parser);
//!
//! assert!(verbose && sleep);
//! assert_eq!(jobs, 4);
//! assert_eq!(residual, "check src/lib.rs");
//! ```
//!
//! The text primitives (canonical buffer, whitespace codec, substring
//! searchers) live in [`argsift_core`] and are re-exported here.

mod error;
mod extract;
mod option;
mod parser;
mod target;

pub use error::ConfigError;
pub use parser::Parser;
pub use target::{Callback, Verdict};

pub use argsift_core::{Alias, AliasSet, CanonicalString, Memo, codec, search};
