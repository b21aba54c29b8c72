//! Candidate search over the term store.
//!
//! A lookup first tries an exact dictionary hit, then falls back to a linear
//! scan of the language's entries. Each entry is pruned by length difference
//! (and, in top mode, by frequency) before its bounded edit distance is
//! computed. In the best-distance modes the bound shrinks to the best
//! distance found so far, which keeps most distance computations short.

use log::{debug, trace};

use crate::error::{Result, SpellError};
use crate::spelling::cancel::CancellationToken;
use crate::spelling::config::SearchConfig;
use crate::spelling::dictionary::{DEFAULT_LANGUAGE, TermRecord, TermStore};
use crate::spelling::levenshtein::DamerauLevenshteinMatcher;
use crate::spelling::suggestion::Suggestion;
use crate::spelling::verbosity::{
    BestDistanceCollector, CandidateCollector, Verbosity, WithinBoundCollector,
};

/// A single lookup: what to search for and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Language namespace to search.
    pub language: String,
    /// Possibly misspelled input term.
    pub input: String,
    /// Maximum edit distance; negative values are rejected.
    pub max_distance: i64,
    /// Which suggestions are returned and how they are ranked.
    pub verbosity: Verbosity,
}

impl SearchRequest {
    /// Create a request against the default language.
    pub fn new<S: Into<String>>(input: S, max_distance: i64, verbosity: Verbosity) -> Self {
        SearchRequest {
            language: DEFAULT_LANGUAGE.to_string(),
            input: input.into(),
            max_distance,
            verbosity,
        }
    }

    /// Create a request from a configuration.
    pub fn from_config<S: Into<String>>(input: S, config: &SearchConfig) -> Self {
        SearchRequest {
            language: config.language.clone(),
            input: input.into(),
            max_distance: i64::try_from(config.max_distance).unwrap_or(i64::MAX),
            verbosity: config.verbosity,
        }
    }

    /// Set the language namespace.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Check preconditions and return the bound as an unsigned distance.
    pub(crate) fn validate(&self) -> Result<usize> {
        if self.input.is_empty() {
            return Err(SpellError::invalid_argument("input term must not be empty"));
        }
        usize::try_from(self.max_distance).map_err(|_| {
            SpellError::invalid_argument(format!(
                "max_distance must not be negative, got {}",
                self.max_distance
            ))
        })
    }
}

/// Counters gathered during one scan, reported at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanStats {
    pub(crate) scanned: usize,
    pub(crate) length_pruned: usize,
    pub(crate) count_pruned: usize,
    pub(crate) scored: usize,
}

impl ScanStats {
    pub(crate) fn add(&mut self, other: ScanStats) {
        self.scanned += other.scanned;
        self.length_pruned += other.length_pruned;
        self.count_pruned += other.count_pruned;
        self.scored += other.scored;
    }
}

/// Answer the lookup from an exact hit when the mode allows it.
pub(crate) fn exact_match(store: &TermStore, request: &SearchRequest) -> Option<Vec<Suggestion>> {
    if !request.verbosity.allows_exact_shortcut() {
        return None;
    }
    let frequency = store.frequency(&request.language, &request.input)?;
    trace!(
        "exact hit for {:?} in {:?} (frequency {frequency})",
        request.input, request.language
    );
    Some(vec![Suggestion::new(request.input.as_str(), 0, frequency)])
}

/// Score a contiguous run of records into `collector`.
pub(crate) fn scan_records<C: CandidateCollector>(
    records: &[TermRecord],
    matcher: &mut DamerauLevenshteinMatcher,
    mut collector: C,
    cancel: &CancellationToken,
) -> Result<(C, ScanStats)> {
    let input_len = matcher.query_len();
    let mut stats = ScanStats::default();

    for record in records {
        if cancel.is_cancelled() {
            return Err(SpellError::cancelled("dictionary scan was cancelled"));
        }
        stats.scanned += 1;

        let bound = collector.bound();
        if record.length.abs_diff(input_len) > bound {
            stats.length_pruned += 1;
            continue;
        }
        if collector.prune(record.frequency) {
            stats.count_pruned += 1;
            continue;
        }

        stats.scored += 1;
        if let Some(distance) = matcher.distance(&record.term, bound) {
            collector.offer(Suggestion::new(
                record.term.as_str(),
                distance,
                record.frequency,
            ));
        }
    }

    Ok((collector, stats))
}

pub(crate) fn log_scan(request: &SearchRequest, stats: &ScanStats, kept: usize) {
    debug!(
        "lookup {:?} in {:?} ({:?}, max distance {}): scanned {}, length pruned {}, count pruned {}, scored {}, returned {}",
        request.input,
        request.language,
        request.verbosity,
        request.max_distance,
        stats.scanned,
        stats.length_pruned,
        stats.count_pruned,
        stats.scored,
        kept
    );
}

/// Sequential suggestion engine over a borrowed, fully populated store.
pub struct SuggestionEngine<'a> {
    store: &'a TermStore,
    config: SearchConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new suggestion engine with the default configuration.
    pub fn new(store: &'a TermStore) -> Self {
        SuggestionEngine {
            store,
            config: SearchConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(store: &'a TermStore, config: SearchConfig) -> Self {
        SuggestionEngine { store, config }
    }

    /// Get the configuration used by [`lookup`](Self::lookup).
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the underlying store.
    pub fn store(&self) -> &TermStore {
        self.store
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

    /// Run a lookup that the caller can cancel through `cancel`.
    ///
    /// No match is an empty list, not an error. A negative bound or an empty
    /// input is rejected with [`SpellError::InvalidArgument`]; a raised token
    /// aborts the scan with [`SpellError::Cancelled`].
    pub fn search_with(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Suggestion>> {
        let max_distance = request.validate()?;
        if let Some(hit) = exact_match(self.store, request) {
            return Ok(hit);
        }

        let records = self.store.records(&request.language);
        let (suggestions, stats) = match request.verbosity {
            Verbosity::Top => self.collect(
                records,
                request,
                BestDistanceCollector::top(max_distance),
                cancel,
            )?,
            Verbosity::AllBest => self.collect(
                records,
                request,
                BestDistanceCollector::all_best(max_distance),
                cancel,
            )?,
            Verbosity::AllWithinBound => self.collect(
                records,
                request,
                WithinBoundCollector::new(max_distance),
                cancel,
            )?,
        };

        log_scan(request, &stats, suggestions.len());
        Ok(suggestions)
    }

    fn collect<C: CandidateCollector>(
        &self,
        records: &[TermRecord],
        request: &SearchRequest,
        collector: C,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Suggestion>, ScanStats)> {
        let mut matcher = DamerauLevenshteinMatcher::new(&request.input);
        let (collector, stats) = scan_records(records, &mut matcher, collector, cancel)?;
        Ok((collector.finish(), stats))
    }

    /// Check if a term exists in the configured language.
    pub fn is_correct(&self, term: &str) -> bool {
        self.store.contains(&self.config.language, term)
    }
}
