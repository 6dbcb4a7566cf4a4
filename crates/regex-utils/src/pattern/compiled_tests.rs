// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn keeps_source_text() {
    let pattern = Pattern::new(r"\d+").unwrap();
    assert_eq!(pattern.as_str(), r"\d+");
    assert_eq!(pattern.to_string(), r"\d+");
    assert_eq!(format!("{pattern:?}"), r#"Pattern("\\d+")"#);
}

#[test]
fn search_regex_is_unanchored() {
    let pattern = Pattern::new("b").unwrap();
    assert!(pattern.as_regex().is_match("abc"));
    assert!(!pattern.is_full_match("abc"));
    assert!(pattern.is_full_match("b"));
}

#[test]
fn invalid_source_is_rejected_before_wrapping() {
    let err = Pattern::new("a)|(b").unwrap_err();
    assert!(err.as_regex_error().is_some());
}

#[test]
fn size_limit_applies_to_both_regexes() {
    let err = PatternBuilder::new(r"\w{50}").size_limit(64).build().unwrap_err();
    assert!(matches!(
        err.as_regex_error(),
        Some(regex::Error::CompiledTooBig(_))
    ));
}

#[test]
fn options_carry_into_anchored_copy() {
    let pattern = PatternBuilder::new("^a$\n^b$")
        .multi_line(true)
        .build()
        .unwrap();
    assert!(pattern.is_full_match("a\nb"));
    assert!(!pattern.is_full_match("a\nb\n"));
}

#[parameterized(
    plain = { "abc", false, false },
    verbose_flag = { "(?x) a # c", false, true },
    verbose_builder = { "a # c", true, true },
    comment_then_newline = { "(?x) a # c\n b", false, false },
    later_flag = { "(?i)a(?x) b # c", false, true },
    scoped_flag = { "(?x: a # c\n)b", false, false },
    literal_hash = { "a#b", false, false },
    disabled = { "(?x-x)a # c", false, false },
)]
fn detects_trailing_comment(source: &str, ignore_whitespace: bool, expected: bool) {
    assert_eq!(ends_in_comment(source, ignore_whitespace), expected);
}

#[test]
fn clones_share_behavior() {
    let pattern = PatternBuilder::new("ab")
        .case_insensitive(true)
        .build()
        .unwrap();
    let copy = pattern.clone();
    assert!(copy.is_full_match("AB"));
    assert_eq!(copy.as_str(), pattern.as_str());
}
