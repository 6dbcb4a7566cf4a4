// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cached regex compilation plus replace, whole-string match and
//! capture-group helpers.

pub mod cache;
pub mod config;
pub mod error;
pub mod pattern;

pub use cache::{CacheStats, PatternCache, global, install_global};
pub use config::CacheConfig;
pub use error::{Error, Result};
pub use pattern::{
    Pattern, PatternBuilder, UUID_PATTERN, get_match, get_match_text, matches, matches_text,
    replace, replace_text, try_replace,
};
