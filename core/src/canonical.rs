//! The canonical argument buffer that matching operates on.

use std::ops::Range;

use crate::codec;

/// The whitespace-normalized, escape-encoded, bundle-expanded working copy
/// of the input being parsed.
///
/// Invariants, upheld from construction through every excision:
///
/// - the buffer begins and ends with exactly one space sentinel;
/// - tokens are separated by exactly one space;
/// - whitespace embedded inside a token is run-length encoded
///   (see [`codec`]), so the only literal spaces are separators;
/// - bundled short flags (`-abc`) are already exploded into their
///   single-flag form (`-a -b -c`).
///
/// Both construction paths converge on the same shape: a token list is
/// encoded token by token, free text is collapsed and split first.
///
/// # Examples
///
/// ```
/// use argsift_core::CanonicalString;
///
/// let buf = CanonicalString::from_tokens(["abc", "asd", "def"]);
/// assert_eq!(buf.as_str(), " abc asd def ");
///
/// let buf = CanonicalString::from_tokens(["abc cba", "asd     dsa", "def$fed"]);
/// assert_eq!(buf.as_str(), r" abc$1$cba asd$5$dsa def\$fed ");
///
/// let buf = CanonicalString::from_text("  run\t-xvf   archive  ");
/// assert_eq!(buf.as_str(), " run -x -v -f archive ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalString {
    buf: String,
}

impl CanonicalString {
    /// Builds the buffer from discrete tokens, argv style.
    ///
    /// Each token is whitespace-encoded on its own, qualifying short-flag
    /// bundles are exploded, and the results are joined with single spaces
    /// between the two sentinels. Empty tokens are dropped.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut parts: Vec<String> = Vec::new();
        for token in tokens {
            let encoded = codec::encode(token.as_ref());
            if encoded.is_empty() {
                continue;
            }
            if is_bundle(&encoded) {
                parts.extend(encoded[1..].chars().map(|c| format!("-{c}")));
            } else {
                parts.push(encoded);
            }
        }
        if parts.is_empty() {
            return Self { buf: " ".to_owned() };
        }
        Self {
            buf: format!(" {} ", parts.join(" ")),
        }
    }

    /// Builds the buffer from one pre-joined string.
    ///
    /// Whitespace runs separate tokens here, so the text is collapsed and
    /// split before rejoining the token path; equivalent input reaches the
    /// same canonical shape either way.
    pub fn from_text(text: &str) -> Self {
        let collapsed = codec::collapse(text);
        Self::from_tokens(collapsed.split(' ').filter(|t| !t.is_empty()))
    }

    /// The buffer text, sentinels included.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no tokens remain between the sentinels.
    pub fn is_empty(&self) -> bool {
        self.buf.trim_matches(' ').is_empty()
    }

    /// Removes `range` from the buffer.
    ///
    /// The caller chooses the range so that exactly one separating space
    /// remains at the junction; a doubled space left by an excision right
    /// at a sentinel is cleaned up by [`into_residual`](Self::into_residual).
    pub fn excise(&mut self, range: Range<usize>) {
        self.buf.replace_range(range, "");
    }

    /// Finishes the parse: collapses any doubled separators, strips the
    /// sentinels, and reverses the whitespace encoding.
    pub fn into_residual(self) -> String {
        let collapsed = codec::collapse(&self.buf);
        codec::decode(collapsed.trim_matches(' '))
    }
}

/// A bundle is a dash followed by at least two characters, none of which is
/// a dash (that would be a long option or a lone short flag) and none of
/// which belongs to the encoding alphabet (a token with embedded whitespace
/// is a value, not a flag run).
fn is_bundle(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('-') else {
        return false;
    };
    rest.chars().count() >= 2 && !rest.contains(['-', '$', '\\'])
}
