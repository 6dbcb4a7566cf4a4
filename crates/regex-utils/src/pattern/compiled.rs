// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns carrying both a search regex and a whole-string regex.

use std::fmt;

use regex::{Regex, RegexBuilder};
use regex_syntax::ast::parse::ParserBuilder;

use crate::error::Result;

/// A compiled pattern.
///
/// Holds the pattern as written plus an anchored copy (`\A(?:..)\z`) built
/// with identical builder options, so whole-string checks agree with
/// searches for every flag and size limit.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    anchored: Regex,
}

/// Options for compiling a [`Pattern`], mirroring `regex::RegexBuilder`.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    source: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    swap_greed: bool,
    crlf: bool,
    unicode: bool,
    size_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
}

impl Pattern {
    /// Compile `source` with default options.
    pub fn new(source: &str) -> Result<Self> {
        PatternBuilder::new(source).build()
    }

    /// The search regex, for APIs this crate does not wrap.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether all of `input` matches.
    pub fn is_full_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }
}

impl AsRef<Regex> for Pattern {
    fn as_ref(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PatternBuilder {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            swap_greed: false,
            crlf: false,
            unicode: true,
            size_limit: None,
            dfa_size_limit: None,
        }
    }

    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn swap_greed(&mut self, yes: bool) -> &mut Self {
        self.swap_greed = yes;
        self
    }

    pub fn crlf(&mut self, yes: bool) -> &mut Self {
        self.crlf = yes;
        self
    }

    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.unicode = yes;
        self
    }

    /// Compiled program size limit in bytes, applied to both regexes.
    pub fn size_limit(&mut self, bytes: usize) -> &mut Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Lazy DFA cache limit in bytes, applied to both regexes.
    pub fn dfa_size_limit(&mut self, bytes: usize) -> &mut Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Compile the pattern and its anchored copy.
    ///
    /// The source is compiled as written first, so text that only becomes
    /// valid once wrapped (e.g. `a)|(b`) is still rejected.
    pub fn build(&self) -> Result<Pattern> {
        let regex = self.regex_builder(&self.source).build()?;
        let anchored = self.regex_builder(&self.anchored_source()).build()?;
        Ok(Pattern { regex, anchored })
    }

    fn regex_builder(&self, source: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed)
            .crlf(self.crlf)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        builder
    }

    fn anchored_source(&self) -> String {
        let source = &self.source;
        if ends_in_comment(source, self.ignore_whitespace) {
            // Without the newline the comment would swallow `)\z`.
            format!("\\A(?:{source}\n)\\z")
        } else {
            format!("\\A(?:{source})\\z")
        }
    }
}

/// Whether `source` ends inside a verbose-mode `# comment`.
fn ends_in_comment(source: &str, ignore_whitespace: bool) -> bool {
    let mut parser = ParserBuilder::new()
        .ignore_whitespace(ignore_whitespace)
        .build();
    match parser.parse_with_comments(source) {
        Ok(parsed) => parsed
            .comments
            .last()
            .is_some_and(|c| c.span.end.offset == source.len()),
        // Invalid sources fail in `build` before the anchored copy is used.
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "compiled_tests.rs"]
mod tests;
