// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// regex-utils error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern text failed to compile (bad syntax or size limit exceeded)
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration text invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration file could not be read
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The global cache was already created when installation was attempted.
    #[error("global pattern cache already installed")]
    AlreadyInstalled,
}

impl Error {
    /// The underlying regex error, if this is a pattern failure.
    pub fn as_regex_error(&self) -> Option<&regex::Error> {
        match self {
            Error::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type using regex-utils Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
