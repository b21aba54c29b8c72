//! Partitioned parallel scan for large dictionaries.
//!
//! The entries of a language are split into fixed-size chunks. Every chunk is
//! scanned on the thread pool with its own collector and its own tightening
//! bound; the partial collectors are then merged in chunk order with the same
//! accept and tie rules as a sequential scan.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, SpellError};
use crate::spelling::cancel::CancellationToken;
use crate::spelling::config::SearchConfig;
use crate::spelling::dictionary::{DEFAULT_LANGUAGE, TermRecord, TermStore};
use crate::spelling::levenshtein::DamerauLevenshteinMatcher;
use crate::spelling::suggest::{
    ScanStats, SearchRequest, SuggestionEngine, exact_match, log_scan, scan_records,
};
use crate::spelling::suggestion::Suggestion;
use crate::spelling::verbosity::{
    BestDistanceCollector, CandidateCollector, Verbosity, WithinBoundCollector,
};

/// Suggestion engine that owns a shared store and a scan thread pool.
pub struct ParallelSuggestionEngine {
    /// Immutable store shared with any other readers.
    store: Arc<TermStore>,

    /// Configuration for the engine.
    config: SearchConfig,

    /// Thread pool for parallel execution.
    thread_pool: Arc<ThreadPool>,
}

impl ParallelSuggestionEngine {
    /// Create a new parallel engine.
    pub fn new(store: Arc<TermStore>, config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.parallel.threads())
            .thread_name(|i| format!("spell-scan-{i}"))
            .build()
            .map_err(|e| SpellError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            store,
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the underlying store.
    pub fn store(&self) -> &TermStore {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Suggestions for `input` using the engine's configuration.
    pub fn lookup(&self, input: &str) -> Result<Vec<Suggestion>> {
        let request = SearchRequest::from_config(input, &self.config);
        self.search_with(&request, &CancellationToken::new())
    }

    /// Suggestions for `input` in the default language.
    pub fn search(
        &self,
        input: &str,
        max_distance: i64,
        verbosity: Verbosity,
    ) -> Result<Vec<Suggestion>> {
        self.search_in(DEFAULT_LANGUAGE, input, max_distance, verbosity)
    }

    /// Suggestions for `input` in the given language.
    pub fn search_in(
        &self,
        language: &str,
        input: &str,
        max_distance: i64,
        verbosity: Verbosity,
    ) -> Result<Vec<Suggestion>> {
        let request = SearchRequest::new(input, max_distance, verbosity).with_language(language);
        self.search_with(&request, &CancellationToken::new())
    }

    /// Run a cancellable lookup, in parallel when the language is large enough.
    pub fn search_with(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Suggestion>> {
        let records = self.store.records(&request.language);
        let parallel = &self.config.parallel;
        if !parallel.enabled || records.len() < parallel.min_entries {
            return SuggestionEngine::new(&self.store).search_with(request, cancel);
        }

        let max_distance = request.validate()?;
        if let Some(hit) = exact_match(&self.store, request) {
            return Ok(hit);
        }

        let (suggestions, stats) = match request.verbosity {
            Verbosity::Top => self.collect(records, request, cancel, || {
                BestDistanceCollector::top(max_distance)
            })?,
            Verbosity::AllBest => self.collect(records, request, cancel, || {
                BestDistanceCollector::all_best(max_distance)
            })?,
            Verbosity::AllWithinBound => self.collect(records, request, cancel, || {
                WithinBoundCollector::new(max_distance)
            })?,
        };

        log_scan(request, &stats, suggestions.len());
        Ok(suggestions)
    }

    fn collect<C, F>(
        &self,
        records: &[TermRecord],
        request: &SearchRequest,
        cancel: &CancellationToken,
        make_collector: F,
    ) -> Result<(Vec<Suggestion>, ScanStats)>
    where
        C: CandidateCollector,
        F: Fn() -> C + Sync,
    {
        let chunk_size = self.config.parallel.chunk_size;
        let partials = self.thread_pool.install(|| {
            records
                .par_chunks(chunk_size)
                .map(|chunk| {
                    let mut matcher = DamerauLevenshteinMatcher::new(&request.input);
                    scan_records(chunk, &mut matcher, make_collector(), cancel)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let mut stats = ScanStats::default();
        let mut merged: Option<C> = None;
        for (collector, partial_stats) in partials {
            stats.add(partial_stats);
            match merged.as_mut() {
                Some(merged) => merged.merge(collector),
                None => merged = Some(collector),
            }
        }

        let suggestions = merged.map(C::finish).unwrap_or_default();
        Ok((suggestions, stats))
    }
}
