//! Invertible whitespace encoding for argument text.
//!
//! Argument parsing works on one flat, space-separated buffer, so a token
//! that itself contains whitespace (a quoted shell argument, say) would fall
//! apart the moment it is joined into that buffer. [`encode`] protects such
//! tokens by replacing every whitespace run of length N with the marker
//! `$N$`, after escaping literal `$` and `\` characters so the marker
//! alphabet stays unambiguous. [`decode`] reverses the transform exactly.
//!
//! # Examples
//!
//! ```
//! use argsift_core::codec;
//!
//! assert_eq!(codec::encode("abc cba"), "abc$1$cba");
//! assert_eq!(codec::encode("asd     dsa"), "asd$5$dsa");
//! assert_eq!(codec::encode("def$fed"), r"def\$fed");
//!
//! let tricky = r"a$1$b \ c";
//! assert_eq!(codec::decode(&codec::encode(tricky)), tricky);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Encodes embedded whitespace in `text` into `$N$` run-length markers.
///
/// Literal `\` and `$` are escaped first (`\\` and `\$`), then every maximal
/// whitespace run of N characters becomes `$N$`. The result contains no
/// whitespace at all, which is what lets encoded tokens live inside a
/// space-separated buffer.
///
/// `decode(encode(s)) == s` holds for every `s` whose whitespace consists of
/// spaces; other whitespace characters come back as spaces, the same
/// normalization the canonical buffer applies everywhere.
pub fn encode(text: &str) -> String {
    let escaped = text.replace('\\', r"\\").replace('$', r"\$");
    WHITESPACE_RUN
        .replace_all(&escaped, |caps: &regex::Captures<'_>| {
            format!("${}$", caps[0].chars().count())
        })
        .into_owned()
}

/// Decodes the [`encode`] transform: markers back to spaces, escapes undone.
///
/// Scanning is left to right: `\\` and `\$` yield the hidden character, a
/// well-formed `$N$` marker yields N spaces, and anything else is copied
/// through. Malformed marker text (`$x$`, an unterminated `$12`) passes
/// through verbatim, so decoding arbitrary non-image text is lenient rather
/// than an error.
pub fn decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        let Some(off) = rest.find(['\\', '$']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..off]);
        i += off;
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'\\' | b'$')) => {
                out.push(bytes[i + 1] as char);
                i += 2;
            }
            b'$' => match marker_at(bytes, i) {
                Some((spaces, end)) => {
                    out.push_str(&" ".repeat(spaces));
                    i = end;
                }
                None => {
                    out.push('$');
                    i += 1;
                }
            },
            // a lone backslash hides nothing
            _ => {
                out.push('\\');
                i += 1;
            }
        }
    }
    out
}

/// Collapses every whitespace run in `text` to a single space.
///
/// Idempotent: collapsing already-collapsed text is a no-op.
pub fn collapse(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Parses a `$N$` marker starting at `start`; returns `(N, end_offset)`.
fn marker_at(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let digits_from = start + 1;
    let mut i = digits_from;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_from || bytes.get(i) != Some(&b'$') {
        return None;
    }
    let count = std::str::from_utf8(&bytes[digits_from..i])
        .ok()?
        .parse()
        .ok()?;
    Some((count, i + 1))
}
