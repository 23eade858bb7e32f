//! Syntax classification and value extraction around a matched alias.
//!
//! Given the span of an alias occurrence inside the canonical buffer, this
//! module decides how the occurrence is written (long form, short form,
//! negated, or an unrelated substring), pulls out the flag truth value or
//! the capture text, and computes the exact byte range to excise so that
//! exactly one separating space remains at the junction.
//!
//! The grammar around a found alias `[f, l)`:
//!
//! ```text
//! --flag            flag is true
//! --flag=VALUE      truthiness of VALUE
//! --flag: VALUE     truthiness of VALUE; a ':' with nothing after is false
//! --no-flag         flag is false (long aliases only)
//! --opt=VALUE       capture "VALUE"
//! --opt VALUE       capture "VALUE"
//! --opt: VALUE      capture "VALUE"
//! --opt             capture "" (the destination's default)
//! --optVALUE        no match: the alias sits inside a longer token
//! ```

use std::ops::Range;

use argsift_core::codec;

/// The long-form negation prefix, as it reads in the buffer.
const NEGATION_PREFIX: &str = "--no";

/// How an alias occurrence is written in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// The byte before the span is the second dash of a long invocation.
    Long,
    /// A two-byte span with no other preceding-byte rule applying.
    Short,
    /// The byte before the span is `o`, possibly the end of `--no`.
    NegationCandidate,
    /// The alias sits inside a longer token; not a match.
    Unrelated,
}

/// Outcome of flag-syntax parsing for boolean destinations.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FlagParse {
    NoMatch,
    Set { value: bool, excise: Range<usize> },
}

/// Outcome of value-syntax parsing for typed and callback destinations.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ValueParse {
    NoMatch,
    Capture { text: String, excise: Range<usize> },
}

/// Parses the occurrence at `span` with flag syntax.
pub(crate) fn parse_flag(buf: &str, span: Range<usize>) -> FlagParse {
    match classify(buf, &span) {
        Boundary::Long | Boundary::Short => flag_syntax(buf, span),
        Boundary::NegationCandidate => negation(buf, span),
        Boundary::Unrelated => FlagParse::NoMatch,
    }
}

/// Parses the occurrence at `span` with value syntax.
pub(crate) fn parse_value(buf: &str, span: Range<usize>) -> ValueParse {
    match classify(buf, &span) {
        Boundary::Long | Boundary::Short => value_syntax(buf, span),
        // negation applies to flags only; a candidate is no match here
        Boundary::NegationCandidate | Boundary::Unrelated => ValueParse::NoMatch,
    }
}

fn classify(buf: &str, span: &Range<usize>) -> Boundary {
    if span.start == 0 {
        return Boundary::Unrelated;
    }
    match buf.as_bytes()[span.start - 1] {
        b'-' => Boundary::Long,
        b'o' => Boundary::NegationCandidate,
        _ if span.len() == 2 => Boundary::Short,
        _ => Boundary::Unrelated,
    }
}

fn flag_syntax(buf: &str, span: Range<usize>) -> FlagParse {
    let (f, l) = (span.start, span.end);
    // long forms carry one more dash than the stored alias text
    let extra = usize::from(span.len() != 2);
    let start = f - extra;

    match buf.as_bytes().get(l).copied() {
        None => FlagParse::Set {
            value: true,
            excise: start..l,
        },
        Some(b' ') => FlagParse::Set {
            value: true,
            excise: start..l + 1,
        },
        Some(b'=') => {
            let value_end = end_of_token(buf, l + 1);
            FlagParse::Set {
                value: truthiness_of(&buf[l + 1..value_end]),
                excise: start..past_separator(buf, value_end),
            }
        }
        Some(b':') => {
            let value_start = skip_spaces(buf, l + 1);
            if value_start == buf.len() {
                // nothing after the ':' means an explicit false
                return FlagParse::Set {
                    value: false,
                    excise: start..l + 1,
                };
            }
            let value_end = end_of_token(buf, value_start);
            FlagParse::Set {
                value: truthiness_of(&buf[value_start..value_end]),
                excise: start..past_separator(buf, value_end),
            }
        }
        // --flagtext is not an invocation of --flag
        Some(_) => FlagParse::NoMatch,
    }
}

fn negation(buf: &str, span: Range<usize>) -> FlagParse {
    // short aliases are never negatable, nor is a stray 'o' a negation
    if span.len() == 2 || !buf[..span.start].ends_with(NEGATION_PREFIX) {
        return FlagParse::NoMatch;
    }
    match buf.as_bytes().get(span.end).copied() {
        Some(b' ') => FlagParse::Set {
            value: false,
            excise: span.start - NEGATION_PREFIX.len()..span.end + 1,
        },
        None => FlagParse::Set {
            value: false,
            excise: span.start - NEGATION_PREFIX.len()..span.end,
        },
        Some(_) => FlagParse::NoMatch,
    }
}

fn value_syntax(buf: &str, span: Range<usize>) -> ValueParse {
    let (f, l) = (span.start, span.end);
    let extra = usize::from(span.len() != 2);
    let start = f - extra;

    match buf.as_bytes().get(l).copied() {
        None => ValueParse::Capture {
            text: String::new(),
            excise: start..l,
        },
        Some(b'=') => {
            let value_end = end_of_token(buf, l + 1);
            ValueParse::Capture {
                text: codec::decode(&buf[l + 1..value_end]),
                excise: start..past_separator(buf, value_end),
            }
        }
        Some(b' ') | Some(b':') => {
            let value_start = skip_spaces(buf, l + 1);
            if value_start == buf.len() {
                // bare alias at the end of the buffer carries no value
                return ValueParse::Capture {
                    text: String::new(),
                    excise: start..l + 1,
                };
            }
            let value_end = end_of_token(buf, value_start);
            ValueParse::Capture {
                text: codec::decode(&buf[value_start..value_end]),
                excise: start..past_separator(buf, value_end),
            }
        }
        // --opttext is not an invocation of --opt
        Some(_) => ValueParse::NoMatch,
    }
}

/// Truthiness of a flag-syntax value token (decoded and lower-cased here).
///
/// `yes`/`true` and `no`/`false` are literal; a token starting with a
/// decimal digit follows `atoi` semantics, truthy iff the leading digit
/// run is nonzero; anything else is truthy iff it contains a non-space
/// character.
fn truthiness_of(raw: &str) -> bool {
    let token = codec::decode(raw).to_lowercase();
    match token.as_str() {
        "yes" | "true" => true,
        "no" | "false" => false,
        _ if token.starts_with(|c: char| c.is_ascii_digit()) => token
            .chars()
            .take_while(char::is_ascii_digit)
            .any(|c| c != '0'),
        _ => token.chars().any(|c| !c.is_whitespace()),
    }
}

/// End of the token starting at `from`: the next space, or end of buffer.
fn end_of_token(buf: &str, from: usize) -> usize {
    buf[from..].find(' ').map_or(buf.len(), |off| from + off)
}

/// First non-space position at or after `from`.
fn skip_spaces(buf: &str, from: usize) -> usize {
    buf[from..]
        .bytes()
        .position(|b| b != b' ')
        .map_or(buf.len(), |off| from + off)
}

/// One past the separating space at `pos`, clamped to the buffer end.
fn past_separator(buf: &str, pos: usize) -> usize {
    if pos < buf.len() { pos + 1 } else { pos }
}
