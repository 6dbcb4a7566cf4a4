// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent cache of compiled patterns keyed by pattern text.
//!
//! Compiled patterns are shared as `Arc<Pattern>`. When the cache reaches its
//! configured capacity, entries that nothing outside the cache still holds
//! are swept before the next insert, so the cache alone never keeps a pattern
//! alive under pressure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use regex::Captures;

use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::pattern::{Pattern, PatternBuilder, matching};

static GLOBAL: OnceLock<PatternCache> = OnceLock::new();

/// The process-wide cache, created with the default config on first use.
pub fn global() -> &'static PatternCache {
    GLOBAL.get_or_init(PatternCache::new)
}

/// Create the process-wide cache with `config`.
///
/// Fails with [`Error::AlreadyInstalled`] once [`global`] has been called or
/// a cache was installed before.
pub fn install_global(config: CacheConfig) -> Result<&'static PatternCache> {
    GLOBAL
        .set(PatternCache::with_config(config))
        .map_err(|_| Error::AlreadyInstalled)?;
    Ok(global())
}

/// Pattern text to compiled pattern map with hit/miss accounting.
pub struct PatternCache {
    /// Compiled patterns by exact pattern text.
    entries: DashMap<String, Arc<Pattern>>,
    config: CacheConfig,
    hits: AtomicUsize,
    misses: AtomicUsize,
    evictions: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that compiled a pattern.
    pub misses: usize,
    /// Entries dropped by eviction sweeps.
    pub evictions: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

impl PatternCache {
    /// Create an empty cache with the default config.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache with `config`.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_config(mut config: CacheConfig) -> Self {
        if config.capacity == 0 {
            tracing::warn!("pattern cache capacity 0 raised to 1");
            config.capacity = 1;
        }
        Self {
            entries: DashMap::new(),
            config,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            evictions: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up `pattern`, compiling and storing it on a miss.
    ///
    /// Compilation runs outside the map's locks, so two racing callers may
    /// both compile the same text. Only the first stored value is kept and
    /// both callers receive it.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Pattern>> {
        if let Some(entry) = self.entries.get(pattern) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(pattern, "pattern cache hit");
            return Ok(Arc::clone(entry.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let compiled = Arc::new(self.compile(pattern)?);

        if self.entries.len() >= self.config.capacity {
            self.sweep();
        }

        let stored = self.entries.entry(pattern.to_string()).or_insert(compiled);
        Ok(Arc::clone(stored.value()))
    }

    /// Replace every match of `pattern` in `input` with `replacer(captures)`.
    pub fn replace<F>(&self, input: &str, pattern: &str, replacer: F) -> Result<String>
    where
        F: FnMut(&Captures<'_>) -> String,
    {
        let compiled = self.get_or_compile(pattern)?;
        Ok(compiled.as_regex().replace_all(input, replacer).into_owned())
    }

    /// Whether all of `input` matches `pattern`.
    pub fn matches(&self, input: &str, pattern: &str) -> Result<bool> {
        Ok(self.get_or_compile(pattern)?.is_full_match(input))
    }

    /// Text of capture `group` in the first match of `pattern` in `input`.
    pub fn get_match<'h>(
        &self,
        input: &'h str,
        pattern: &str,
        group: usize,
    ) -> Result<Option<&'h str>> {
        let compiled = self.get_or_compile(pattern)?;
        Ok(matching::get_match(input, &compiled, group))
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn compile(&self, pattern: &str) -> Result<Pattern> {
        let mut builder = PatternBuilder::new(pattern);
        if let Some(limit) = self.config.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.config.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        let compiled = builder.build()?;
        tracing::debug!(pattern, "compiled pattern");
        Ok(compiled)
    }

    /// Drop entries not referenced outside the cache.
    fn sweep(&self) -> usize {
        let mut evicted = 0;
        self.entries.retain(|_, compiled| {
            let in_use = Arc::strong_count(compiled) > 1;
            if !in_use {
                evicted += 1;
            }
            in_use
        });
        self.evictions.fetch_add(evicted, Ordering::Relaxed);
        tracing::debug!(
            evicted,
            remaining = self.entries.len(),
            "pattern cache sweep"
        );
        evicted
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
