//! Configuration errors.
//!
//! Parsing itself never fails: an absent option is not an error and a
//! capture that does not convert is dropped silently. These variants only
//! cover caller misconfiguration and surface as panic payloads at the
//! point of misuse.

use thiserror::Error;

/// Errors caused by misconfigured registrations, never by input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A callback declares more derived parameters than the grammar can
    /// supply.
    #[error("callback for option '{option}' declares {declared} derived parameters, at most 2 are supported")]
    CallbackArity { option: String, declared: usize },

    /// An alias specification contained no usable aliases.
    #[error("alias specification '{spec}' contains no usable aliases")]
    EmptyAliasSpec { spec: String },
}
