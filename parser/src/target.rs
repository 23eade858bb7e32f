//! Destinations that receive matched option values.
//!
//! A registered option delivers into one of a closed set of targets: a
//! write-back slot borrowed from the caller, or a [`Callback`]. Flag-syntax
//! outcomes travel through the same slot path as the canonical texts
//! `"true"` / `"false"`, so boolean and typed destinations share one
//! delivery mechanism.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::str::FromStr;

use tracing::{trace, warn};

use crate::error::ConfigError;

/// Success convention for callback return values.
///
/// Mirrors the shell-flavored conventions of the callback grammar: unit
/// always succeeds, booleans succeed on `true`, integers on zero,
/// [`Option`] on presence and [`Result`] on `Ok`. A failed callback is
/// retried exactly once, with no further diagnostic.
pub trait Verdict {
    /// Whether this return value counts as success.
    fn is_success(&self) -> bool;
}

impl Verdict for () {
    fn is_success(&self) -> bool {
        true
    }
}

impl Verdict for bool {
    fn is_success(&self) -> bool {
        *self
    }
}

/// Shell convention: zero is success.
impl Verdict for i32 {
    fn is_success(&self) -> bool {
        *self == 0
    }
}

impl<T> Verdict for Option<T> {
    fn is_success(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Verdict for Result<T, E> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }
}

/// A function destination taking zero, one, or two derived arguments.
///
/// The capture text drives the arguments: a unary callback receives the
/// capture converted to its parameter type, a binary callback additionally
/// receives the raw capture text. String parameters get the capture
/// verbatim, the empty string included. Failed conversions fall back to
/// the parameter type's default rather than aborting the parse.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use argsift::{Callback, Parser};
///
/// let jobs = Cell::new(0u32);
/// let mut parser = Parser::new();
/// parser.callback("jobs|j", Callback::unary(|n: u32| jobs.set(n)));
///
/// let residual = parser.parse(["--jobs=4", "build"]);
/// assert_eq!(jobs.get(), 4);
/// assert_eq!(residual, "build");
/// ```
pub struct Callback<'a> {
    invoke: Box<dyn FnMut(&str) -> bool + 'a>,
    declared_params: usize,
    param_type: TypeId,
    param_type_name: &'static str,
}

impl<'a> Callback<'a> {
    /// A callback taking no derived arguments.
    pub fn nullary<R, F>(mut f: F) -> Self
    where
        R: Verdict,
        F: FnMut() -> R + 'a,
    {
        Self {
            invoke: Box::new(move |_| f().is_success()),
            declared_params: 0,
            param_type: TypeId::of::<()>(),
            param_type_name: type_name::<()>(),
        }
    }

    /// A callback taking the capture converted to `T`.
    pub fn unary<T, R, F>(mut f: F) -> Self
    where
        T: FromStr + Default + 'static,
        R: Verdict,
        F: FnMut(T) -> R + 'a,
    {
        Self {
            invoke: Box::new(move |capture| f(convert::<T>(capture)).is_success()),
            declared_params: 1,
            param_type: TypeId::of::<T>(),
            param_type_name: type_name::<T>(),
        }
    }

    /// A callback taking the converted capture and the raw capture text.
    pub fn binary<T, R, F>(mut f: F) -> Self
    where
        T: FromStr + Default + 'static,
        R: Verdict,
        F: FnMut(T, &str) -> R + 'a,
    {
        Self {
            invoke: Box::new(move |capture| f(convert::<T>(capture), capture).is_success()),
            declared_params: 2,
            param_type: TypeId::of::<T>(),
            param_type_name: type_name::<T>(),
        }
    }

    /// Overrides the declared parameter count.
    ///
    /// Marshalling layers wrapping foreign callbacks can declare the true
    /// arity the type system cannot see; anything above two is a
    /// configuration error raised when the option first matches.
    pub fn with_declared_params(mut self, declared: usize) -> Self {
        self.declared_params = declared;
        self
    }

    /// Type identity the registry groups this callback under.
    pub(crate) fn param_type(&self) -> TypeId {
        self.param_type
    }

    pub(crate) fn param_type_name(&self) -> &'static str {
        self.param_type_name
    }

    /// Runs the callback for a capture; a failed run is retried exactly
    /// once, after which no further diagnostic is performed.
    ///
    /// # Panics
    ///
    /// Panics with [`ConfigError::CallbackArity`] when more than two
    /// derived parameters are declared, unless `fail_silently` is set, in
    /// which case the fault is logged and swallowed.
    pub(crate) fn fire(&mut self, option: &str, capture: &str, fail_silently: bool) {
        if self.declared_params > 2 {
            let err = ConfigError::CallbackArity {
                option: option.to_owned(),
                declared: self.declared_params,
            };
            if fail_silently {
                warn!(option, declared = self.declared_params, "callback arity fault swallowed");
                return;
            }
            panic!("{err}");
        }
        if !(self.invoke)(capture) {
            (self.invoke)(capture);
        }
    }
}

impl fmt::Debug for Callback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("declared_params", &self.declared_params)
            .field("param_type", &self.param_type_name)
            .finish_non_exhaustive()
    }
}

/// Write-back delivery into a caller-borrowed slot.
pub(crate) trait Assign {
    fn assign(&mut self, capture: &str);
}

/// A borrowed destination of any `FromStr` type.
pub(crate) struct Slot<'a, T: FromStr + Default>(pub(crate) &'a mut T);

impl<T: FromStr + Default> Assign for Slot<'_, T> {
    /// An empty capture assigns the type's default; a capture that does
    /// not convert leaves the destination at its prior value. String
    /// destinations receive the capture verbatim either way.
    fn assign(&mut self, capture: &str) {
        if capture.is_empty() {
            *self.0 = T::default();
            return;
        }
        match capture.parse() {
            Ok(value) => *self.0 = value,
            Err(_) => trace!(
                capture,
                destination = type_name::<T>(),
                "capture did not convert, destination unchanged"
            ),
        }
    }
}

/// The closed set of destination variants dispatch runs against.
pub(crate) enum Target<'a> {
    /// A write-back slot; `flag` selects flag syntax over value syntax.
    Slot {
        assign: Box<dyn Assign + 'a>,
        flag: bool,
    },
    /// A function destination, always parsed with value syntax.
    Callback(Callback<'a>),
}

/// Converts a capture for a callback parameter, defaulting on failure.
fn convert<T: FromStr + Default>(capture: &str) -> T {
    if capture.is_empty() {
        return T::default();
    }
    capture.parse().unwrap_or_else(|_| {
        trace!(
            capture,
            parameter = type_name::<T>(),
            "capture did not convert, passing default"
        );
        T::default()
    })
}

/// Type identity of a slot destination, for registry grouping.
pub(crate) fn slot_type<T: Any>() -> (TypeId, &'static str) {
    (TypeId::of::<T>(), type_name::<T>())
}
