//! Option alias spellings and their cached search plans.

use std::ops::Range;

use crate::memo::Memo;
use crate::search;

/// Alias lengths above this always take the skip-table searcher.
const LONG_ALIAS_THRESHOLD: usize = 15;

/// One registered spelling of an option, stored with a single leading dash.
///
/// Long invocations (`--verbose`) gain their second dash from the buffer
/// text itself, so `-verbose` finds both forms. Each alias carries the
/// preprocessing state for both searchers in [`Memo`] cells: computed on
/// first use, reused for every later parse of the owning descriptor.
#[derive(Clone, Debug)]
pub struct Alias {
    text: String,
    failure_table: Memo<Vec<usize>, str>,
    skip_table: Memo<[usize; 256], str>,
}

impl Alias {
    fn new(spelling: &str) -> Self {
        Self {
            text: format!("-{spelling}"),
            failure_table: Memo::new(search::failure_table),
            skip_table: Memo::new(search::skip_table),
        }
    }

    /// The dash-prefixed text searched for in the canonical buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True for a one-character short form (`-v`).
    pub fn is_short(&self) -> bool {
        self.text.len() == 2
    }

    /// Finds the leftmost occurrence of this alias in `buffer`.
    ///
    /// Searcher choice is a pure performance heuristic: the skip-table
    /// search when the alias is long in itself or relative to the buffer,
    /// KMP otherwise. Returns a half-open byte span, or `None` when the
    /// alias does not occur at all.
    pub fn locate_in(&self, buffer: &str) -> Option<Range<usize>> {
        let len = self.text.len();
        let found = if len > LONG_ALIAS_THRESHOLD || len * 5 >= buffer.len() {
            let table = self.skip_table.get_with(&self.text);
            search::horspool_find(&self.text, table, buffer)
        } else {
            let table = self.failure_table.get_with(&self.text);
            search::kmp_find(&self.text, table, buffer)
        };
        found.map(|start| start..start + len)
    }
}

/// The ordered alias list of one option descriptor.
///
/// Parsed from a pipe-delimited specification; empty components are
/// ignored and each remaining component is stored dash-prefixed.
///
/// # Examples
///
/// ```
/// use argsift_core::AliasSet;
///
/// let names = AliasSet::parse("quiet|silent|q|");
/// let texts: Vec<_> = names.iter().map(|a| a.text().to_owned()).collect();
/// assert_eq!(texts, ["-quiet", "-silent", "-q"]);
/// assert!(names.contains("silent"));
/// assert!(names.contains("-q"));
/// ```
#[derive(Clone, Debug)]
pub struct AliasSet {
    aliases: Vec<Alias>,
    spec: String,
}

impl AliasSet {
    /// Parses `spec` into its aliases, preserving order.
    pub fn parse(spec: &str) -> Self {
        let aliases = spec
            .split('|')
            .filter(|part| !part.is_empty())
            .map(Alias::new)
            .collect();
        Self {
            aliases,
            spec: spec.to_owned(),
        }
    }

    /// The specification string this set was parsed from.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Aliases in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Whether any stored alias spells `spelling` (leading dash optional).
    pub fn contains(&self, spelling: &str) -> bool {
        let dashed;
        let lookup = if spelling.starts_with('-') {
            spelling
        } else {
            dashed = format!("-{spelling}");
            &dashed
        };
        self.aliases.iter().any(|alias| alias.text == lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prepends_one_dash() {
        let names = AliasSet::parse("verbose|v");
        let texts: Vec<_> = names.iter().map(|a| a.text().to_owned()).collect();
        assert_eq!(texts, ["-verbose", "-v"]);
        assert!(!names.iter().next().unwrap().is_short());
        assert!(names.iter().nth(1).unwrap().is_short());
    }

    #[test]
    fn test_parse_ignores_empty_components() {
        let names = AliasSet::parse("|opt||o|");
        assert_eq!(names.len(), 2);
        assert_eq!(names.spec(), "|opt||o|");
    }

    #[test]
    fn test_parse_empty_spec_yields_empty_set() {
        assert!(AliasSet::parse("").is_empty());
        assert!(AliasSet::parse("||").is_empty());
    }

    #[test]
    fn test_locate_in_finds_leftmost() {
        let names = AliasSet::parse("test|t");
        let alias = names.iter().next().unwrap();
        let buffer = " x --test y --test z ";
        let span = alias.locate_in(buffer).unwrap();
        assert_eq!(span, 4..9);
        assert_eq!(&buffer[span], "-test");
    }

    #[test]
    fn test_locate_in_exercises_both_searchers() {
        // short alias in a long buffer takes the KMP path
        let names = AliasSet::parse("v");
        let alias = names.iter().next().unwrap();
        let buffer = format!(" {} -v ", "filler ".repeat(8));
        assert!(alias.locate_in(&buffer).is_some());

        // an alias past the length threshold takes the skip-table path
        let names = AliasSet::parse("extraordinarily-long-option");
        let alias = names.iter().next().unwrap();
        let buffer = " --extraordinarily-long-option rest ";
        assert_eq!(alias.locate_in(buffer).unwrap().start, 2);
    }

    #[test]
    fn test_locate_in_absent_alias() {
        let names = AliasSet::parse("missing");
        let alias = names.iter().next().unwrap();
        assert!(alias.locate_in(" some other text ").is_none());
    }

    #[test]
    fn test_search_plans_are_cached_per_alias() {
        let names = AliasSet::parse("v");
        let alias = names.iter().next().unwrap();
        let long_buffer = format!(" {} -v ", "filler ".repeat(8));
        alias.locate_in(&long_buffer);
        alias.locate_in(&long_buffer);
        // one plan computed, the clone starts from scratch
        let fresh = names.clone();
        let fresh_alias = fresh.iter().next().unwrap();
        assert!(fresh_alias.locate_in(&long_buffer).is_some());
    }
}
