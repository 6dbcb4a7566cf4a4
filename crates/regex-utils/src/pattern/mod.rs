// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex helpers over precompiled patterns and cached pattern text.
//!
//! Every operation comes in two forms:
//! - `op(input, &Pattern, ..)` for a pattern the caller already compiled
//! - `op_text(input, &str, ..)` resolving pattern text through [`global`](crate::global)

pub mod compiled;
pub mod matching;
pub mod replace;

use std::sync::LazyLock;

pub use compiled::{Pattern, PatternBuilder};
pub use matching::{get_match, get_match_text, matches, matches_text};
pub use replace::{replace, replace_text, try_replace};

/// Canonical lowercase hyphenated UUID (8-4-4-4-12 hex digits).
#[allow(clippy::expect_used)]
pub static UUID_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new("[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("valid regex")
});

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
