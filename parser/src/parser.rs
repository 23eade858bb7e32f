//! The option registry and parse entry points.

use std::any::{Any, TypeId};
use std::str::FromStr;

use argsift_core::{AliasSet, CanonicalString};
use tracing::debug;

use crate::error::ConfigError;
use crate::option::{OptionGroup, OptionSpec};
use crate::target::{Callback, Slot, Target, slot_type};

/// The option registry: registration front-end and parse dispatcher.
///
/// Options are registered fluently against caller-borrowed destinations
/// and grouped by destination value type. A parse canonicalizes the input
/// once, threads the buffer through every group in group-creation order
/// (and through each group's options in registration order), then returns
/// the residual text with all matched syntax excised.
///
/// The parser borrows every destination until it is dropped; drop it (or
/// let it fall out of scope) before reading the parsed values back.
///
/// # Examples
///
/// ```
/// use argsift::Parser;
///
/// let mut verbose = false;
/// let mut jobs = 0u32;
///
/// let mut parser = Parser::new();
/// parser
///     .flag("verbose|v", &mut verbose)
///     .option("jobs|j", &mut jobs);
/// let residual = parser.parse(["build", "--verbose", "--jobs=4"]);
/// drop(parser);
///
/// assert!(verbose);
/// assert_eq!(jobs, 4);
/// assert_eq!(residual, "build");
/// ```
pub struct Parser<'a> {
    groups: Vec<OptionGroup<'a>>,
    fail_silently: bool,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Parser<'a> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            fail_silently: false,
        }
    }

    /// Lenient mode: callback arity faults are logged and swallowed
    /// instead of panicking.
    pub fn fail_silently(&mut self, enabled: bool) -> &mut Self {
        self.fail_silently = enabled;
        self
    }

    /// Registers a boolean flag parsed with flag syntax
    /// (presence, `=value` / `: value` truthiness, `--no-` negation).
    ///
    /// # Panics
    ///
    /// Panics with [`ConfigError::EmptyAliasSpec`] when `spec` contains no
    /// usable aliases.
    pub fn flag(&mut self, spec: &str, dest: &'a mut bool) -> &mut Self {
        let aliases = parse_spec(spec);
        let (key, name) = slot_type::<bool>();
        self.register(
            key,
            name,
            OptionSpec {
                aliases,
                target: Target::Slot {
                    assign: Box::new(Slot(dest)),
                    flag: true,
                },
            },
        )
    }

    /// Registers a valued option writing into `dest` via its [`FromStr`]
    /// conversion. A missing value assigns `T::default()`; a failed
    /// conversion leaves the destination untouched.
    ///
    /// A `bool` destination registered this way still gets flag syntax.
    ///
    /// # Panics
    ///
    /// Panics with [`ConfigError::EmptyAliasSpec`] when `spec` contains no
    /// usable aliases.
    pub fn option<T>(&mut self, spec: &str, dest: &'a mut T) -> &mut Self
    where
        T: FromStr + Default + Any,
    {
        let aliases = parse_spec(spec);
        let (key, name) = slot_type::<T>();
        let flag = key == TypeId::of::<bool>();
        self.register(
            key,
            name,
            OptionSpec {
                aliases,
                target: Target::Slot {
                    assign: Box::new(Slot(dest)),
                    flag,
                },
            },
        )
    }

    /// Registers a callback destination, parsed with value syntax and
    /// grouped under the callback's derived parameter type.
    ///
    /// # Panics
    ///
    /// Panics with [`ConfigError::EmptyAliasSpec`] when `spec` contains no
    /// usable aliases.
    pub fn callback(&mut self, spec: &str, callback: Callback<'a>) -> &mut Self {
        let aliases = parse_spec(spec);
        let (key, name) = (callback.param_type(), callback.param_type_name());
        self.register(
            key,
            name,
            OptionSpec {
                aliases,
                target: Target::Callback(callback),
            },
        )
    }

    /// Parses discrete tokens, argv style, and returns the residual text.
    pub fn parse<I>(&mut self, tokens: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.run(CanonicalString::from_tokens(tokens))
    }

    /// Parses one pre-joined string and returns the residual text.
    pub fn parse_str(&mut self, text: &str) -> String {
        self.run(CanonicalString::from_text(text))
    }

    /// Parses the process argument vector, program name skipped.
    pub fn parse_env(&mut self) -> String {
        self.parse(std::env::args().skip(1))
    }

    /// Removes every descriptor registered under `alias` (leading dash
    /// optional); emptied groups disappear. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, alias: &str) -> bool {
        let mut removed = false;
        for group in &mut self.groups {
            let before = group.options.len();
            group.options.retain(|option| !option.aliases.contains(alias));
            removed |= group.options.len() != before;
        }
        self.groups.retain(|group| !group.options.is_empty());
        removed
    }

    /// Number of registered option descriptors.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.options.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn register(
        &mut self,
        key: TypeId,
        type_name: &'static str,
        option: OptionSpec<'a>,
    ) -> &mut Self {
        match self.groups.iter().position(|group| group.key == key) {
            Some(i) => self.groups[i].options.push(option),
            None => {
                let mut group = OptionGroup::new(key, type_name);
                group.options.push(option);
                self.groups.push(group);
            }
        }
        self
    }

    fn run(&mut self, mut buf: CanonicalString) -> String {
        debug!(
            groups = self.groups.len(),
            options = self.len(),
            buffer_len = buf.len(),
            "dispatch started"
        );
        let fail_silently = self.fail_silently;
        for group in &mut self.groups {
            group.handle(&mut buf, fail_silently);
        }
        let residual = buf.into_residual();
        debug!(residual_len = residual.len(), "dispatch finished");
        residual
    }
}

fn parse_spec(spec: &str) -> AliasSet {
    let aliases = AliasSet::parse(spec);
    if aliases.is_empty() {
        let err = ConfigError::EmptyAliasSpec {
            spec: spec.to_owned(),
        };
        panic!("{err}");
    }
    aliases
}
