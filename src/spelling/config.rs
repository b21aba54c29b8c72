//! Configuration for suggestion lookups.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::dictionary::DEFAULT_LANGUAGE;
use crate::spelling::verbosity::Verbosity;

/// Configuration used by [`SuggestionEngine::lookup`](crate::spelling::SuggestionEngine::lookup)
/// and the parallel engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum edit distance of returned suggestions.
    pub max_distance: usize,

    /// Which suggestions are returned and how they are ranked.
    pub verbosity: Verbosity,

    /// Language namespace to search.
    pub language: String,

    /// Parallel scan settings.
    pub parallel: ParallelConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_distance: 2,
            verbosity: Verbosity::Top,
            language: DEFAULT_LANGUAGE.to_string(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Create a configuration with the given distance bound.
    pub fn new(max_distance: usize) -> Self {
        SearchConfig {
            max_distance,
            ..Default::default()
        }
    }

    /// Set the verbosity mode.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the language namespace.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Set the parallel scan settings.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration for values that cannot be honoured.
    pub fn validate(&self) -> Result<()> {
        self.parallel.validate()
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Settings for splitting a scan across worker threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether lookups may run in parallel at all.
    pub enabled: bool,

    /// Languages with fewer entries than this are scanned sequentially.
    pub min_entries: usize,

    /// Number of entries per partition.
    pub chunk_size: usize,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            enabled: false,
            min_entries: 50_000,
            chunk_size: 8_192,
            thread_pool_size: None,
        }
    }
}

impl ParallelConfig {
    /// Parallel settings with scanning enabled.
    pub fn enabled() -> Self {
        ParallelConfig {
            enabled: true,
            ..Default::default()
        }
    }

    /// Set the sequential fallback threshold.
    pub fn with_min_entries(mut self, min_entries: usize) -> Self {
        self.min_entries = min_entries;
        self
    }

    /// Set the partition size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the number of worker threads.
    pub fn with_thread_pool_size(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Effective number of worker threads.
    pub fn threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values that cannot be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SpellError::invalid_config("chunk_size must be positive"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(SpellError::invalid_config(
                "thread_pool_size must be positive when set",
            ));
        }
        Ok(())
    }
}
