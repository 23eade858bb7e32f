//! Registered option descriptors and their per-type groups.

use std::any::TypeId;

use argsift_core::{AliasSet, CanonicalString};
use tracing::trace;

use crate::extract::{self, FlagParse, ValueParse};
use crate::target::Target;

/// One registered option: its alias spellings and its destination.
///
/// Immutable after registration; the destination borrow is fixed for the
/// life of the registry.
pub(crate) struct OptionSpec<'a> {
    pub(crate) aliases: AliasSet,
    pub(crate) target: Target<'a>,
}

impl OptionSpec<'_> {
    /// Probes each alias in registration order against the leftmost
    /// occurrence in `buf`; the first alias whose occurrence parses wins,
    /// delivers to the destination, and has its consumed text excised.
    /// An absent or unparseable alias leaves buffer and destination alone.
    pub(crate) fn apply(&mut self, buf: &mut CanonicalString, fail_silently: bool) {
        for alias in self.aliases.iter() {
            let Some(span) = alias.locate_in(buf.as_str()) else {
                continue;
            };
            let matched = match &mut self.target {
                Target::Slot { assign, flag: true } => {
                    match extract::parse_flag(buf.as_str(), span) {
                        FlagParse::Set { value, excise } => {
                            assign.assign(if value { "true" } else { "false" });
                            buf.excise(excise);
                            true
                        }
                        FlagParse::NoMatch => false,
                    }
                }
                Target::Slot {
                    assign,
                    flag: false,
                } => match extract::parse_value(buf.as_str(), span) {
                    ValueParse::Capture { text, excise } => {
                        assign.assign(&text);
                        buf.excise(excise);
                        true
                    }
                    ValueParse::NoMatch => false,
                },
                Target::Callback(callback) => match extract::parse_value(buf.as_str(), span) {
                    ValueParse::Capture { text, excise } => {
                        callback.fire(alias.text(), &text, fail_silently);
                        buf.excise(excise);
                        true
                    }
                    ValueParse::NoMatch => false,
                },
            };
            if matched {
                trace!(alias = alias.text(), "alias matched and excised");
                return;
            }
        }
    }
}

/// All options whose destination shares one value type, in registration
/// order.
pub(crate) struct OptionGroup<'a> {
    pub(crate) key: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) options: Vec<OptionSpec<'a>>,
}

impl<'a> OptionGroup<'a> {
    pub(crate) fn new(key: TypeId, type_name: &'static str) -> Self {
        Self {
            key,
            type_name,
            options: Vec::new(),
        }
    }

    /// Threads `buf` through every option of the group in registration
    /// order; each option sees the buffer as rewritten by its
    /// predecessors.
    pub(crate) fn handle(&mut self, buf: &mut CanonicalString, fail_silently: bool) {
        trace!(
            group = self.type_name,
            options = self.options.len(),
            "processing option group"
        );
        for option in &mut self.options {
            option.apply(buf, fail_silently);
        }
    }
}
