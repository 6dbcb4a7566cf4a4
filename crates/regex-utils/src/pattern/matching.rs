// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-string matching and capture extraction.

use crate::cache::global;
use crate::error::Result;
use crate::pattern::Pattern;

/// Whether all of `input` matches `pattern`.
pub fn matches(input: &str, pattern: &Pattern) -> bool {
    pattern.is_full_match(input)
}

/// Whether all of `input` matches the pattern text.
pub fn matches_text(input: &str, pattern: &str) -> Result<bool> {
    global().matches(input, pattern)
}

/// Text of capture `group` (0 = whole match) in the first match of `pattern`.
///
/// `None` when nothing matches, when the pattern has no such group, or when
/// the group did not take part in the match.
pub fn get_match<'h>(input: &'h str, pattern: &Pattern, group: usize) -> Option<&'h str> {
    let regex = pattern.as_regex();
    if group == 0 {
        return regex.find(input).map(|m| m.as_str());
    }
    if group >= regex.captures_len() {
        return None;
    }
    regex.captures(input)?.get(group).map(|m| m.as_str())
}

/// [`get_match`] with the pattern text resolved through the global cache.
pub fn get_match_text<'h>(
    input: &'h str,
    pattern: &str,
    group: usize,
) -> Result<Option<&'h str>> {
    global().get_match(input, pattern, group)
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
