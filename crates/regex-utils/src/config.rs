// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern cache configuration.
//!
//! Loaded from a TOML document of the form:
//!
//! ```toml
//! version = 1
//!
//! [cache]
//! capacity = 256
//! size_limit = 10485760
//! dfa_size_limit = 2097152
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Default number of cached patterns before an eviction sweep.
pub const DEFAULT_CAPACITY: usize = 256;

/// Top-level config document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    version: Option<i64>,
    #[serde(default)]
    cache: CacheConfig,
}

/// Tuning for a [`PatternCache`](crate::PatternCache).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Entry count at which unreferenced patterns are evicted.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,

    /// Compiled program size limit in bytes (regex crate default if unset).
    #[serde(default)]
    pub size_limit: Option<usize>,

    /// Lazy DFA cache size limit in bytes (regex crate default if unset).
    #[serde(default)]
    pub dfa_size_limit: Option<usize>,
}

impl CacheConfig {
    fn default_capacity() -> usize {
        DEFAULT_CAPACITY
    }

    /// Builder-style capacity override; 0 is raised to 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config {
                message: "cache.capacity must be at least 1".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        for (key, value) in [
            ("size_limit", self.size_limit),
            ("dfa_size_limit", self.dfa_size_limit),
        ] {
            if value == Some(0) {
                return Err(Error::Config {
                    message: format!("cache.{key} must be greater than 0"),
                    path: Some(path.to_path_buf()),
                });
            }
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            size_limit: None,
            dfa_size_limit: None,
        }
    }
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<CacheConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
///
/// `path` is only used to annotate errors.
pub fn parse(content: &str, path: &Path) -> Result<CacheConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = file.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    file.cache.validate(path)?;
    Ok(file.cache)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
