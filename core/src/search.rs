//! Exact substring search primitives.
//!
//! Two classic searchers with their preprocessing split out, so the tables
//! can be computed once per needle and reused across many haystacks:
//!
//! - [`failure_table`] / [`kmp_find`] — Knuth-Morris-Pratt, cheap setup,
//!   good for short needles;
//! - [`skip_table`] / [`horspool_find`] — Boyer-Moore-Horspool, pays off
//!   when the needle is long enough for its jumps to matter.
//!
//! Both find the leftmost occurrence with exact, case-sensitive byte
//! semantics; which one runs is purely a performance choice.

/// Builds the KMP prefix-failure table for `needle`.
pub fn failure_table(needle: &str) -> Vec<usize> {
    let n = needle.as_bytes();
    let mut table = vec![0usize; n.len()];
    let mut k = 0;
    for i in 1..n.len() {
        while k > 0 && n[i] != n[k] {
            k = table[k - 1];
        }
        if n[i] == n[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

/// Leftmost occurrence of `needle` in `hay`, driven by its [`failure_table`].
pub fn kmp_find(needle: &str, table: &[usize], hay: &str) -> Option<usize> {
    let n = needle.as_bytes();
    if n.is_empty() {
        return Some(0);
    }
    let mut k = 0;
    for (i, &b) in hay.as_bytes().iter().enumerate() {
        while k > 0 && b != n[k] {
            k = table[k - 1];
        }
        if b == n[k] {
            k += 1;
        }
        if k == n.len() {
            return Some(i + 1 - k);
        }
    }
    None
}

/// Builds the Horspool bad-character skip table for `needle`.
pub fn skip_table(needle: &str) -> [usize; 256] {
    let n = needle.as_bytes();
    let mut table = [n.len().max(1); 256];
    for (i, &b) in n.iter().enumerate().take(n.len().saturating_sub(1)) {
        table[b as usize] = n.len() - 1 - i;
    }
    table
}

/// Leftmost occurrence of `needle` in `hay`, driven by its [`skip_table`].
pub fn horspool_find(needle: &str, table: &[usize; 256], hay: &str) -> Option<usize> {
    let n = needle.as_bytes();
    let h = hay.as_bytes();
    if n.is_empty() {
        return Some(0);
    }
    let mut pos = 0;
    while pos + n.len() <= h.len() {
        if &h[pos..pos + n.len()] == n {
            return Some(pos);
        }
        pos += table[h[pos + n.len() - 1] as usize];
    }
    None
}
