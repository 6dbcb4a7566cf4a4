// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Left-to-right replacement of non-overlapping matches.

use regex::Captures;

use crate::cache::global;
use crate::error::Result;
use crate::pattern::Pattern;

/// Replace every match of `pattern` with `replacer(matched_text)`.
///
/// Text between matches is copied through unchanged.
pub fn replace<F>(input: &str, pattern: &Pattern, mut replacer: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for m in pattern.as_regex().find_iter(input) {
        out.push_str(&input[last..m.start()]);
        out.push_str(&replacer(m.as_str()));
        last = m.end();
    }
    out.push_str(&input[last..]);
    out
}

/// Replace every match of the pattern text with `replacer(captures)`.
///
/// The text is compiled through the global cache; invalid syntax is
/// returned as [`Error::InvalidPattern`](crate::Error::InvalidPattern).
pub fn replace_text<F>(input: &str, pattern: &str, replacer: F) -> Result<String>
where
    F: FnMut(&Captures<'_>) -> String,
{
    global().replace(input, pattern, replacer)
}

/// Like [`replace`], but the replacer may fail.
///
/// The first error stops the scan and is returned as is.
pub fn try_replace<F, E>(
    input: &str,
    pattern: &Pattern,
    mut replacer: F,
) -> std::result::Result<String, E>
where
    F: FnMut(&Captures<'_>) -> std::result::Result<String, E>,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for caps in pattern.as_regex().captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&input[last..whole.start()]);
        out.push_str(&replacer(&caps)?);
        last = whole.end();
    }
    out.push_str(&input[last..]);
    Ok(out)
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
