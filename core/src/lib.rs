//! Text primitives for option matching.
//!
//! This crate carries the pieces the `argsift` engine matches options with:
//!
//! - [`CanonicalString`] — the whitespace-normalized, escape-encoded,
//!   bundle-expanded buffer a parse works on.
//! - [`codec`] — the invertible whitespace encoding behind it.
//! - [`search`] — KMP and Horspool exact substring searchers with their
//!   preprocessing split out.
//! - [`Alias`] / [`AliasSet`] — option spellings with per-alias cached
//!   search plans.
//! - [`Memo`] — the compute-once cell those caches are built on.
//!
//! # Example
//!
//! ```
//! use argsift_core::{AliasSet, CanonicalString};
//!
//! let buf = CanonicalString::from_tokens(["--jobs", "4", "src main.rs"]);
//! assert_eq!(buf.as_str(), " --jobs 4 src$1$main.rs ");
//!
//! let names = AliasSet::parse("jobs|j");
//! let alias = names.iter().next().unwrap();
//! let span = alias.locate_in(buf.as_str()).unwrap();
//! assert_eq!(&buf.as_str()[span], "-jobs");
//! ```

mod alias;
mod canonical;
pub mod codec;
mod memo;
pub mod search;

pub use alias::{Alias, AliasSet};
pub use canonical::CanonicalString;
pub use memo::Memo;
