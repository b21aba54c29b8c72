//! Approximate term lookup over a frequency dictionary.
//!
//! A [`TermStore`] maps `(language, term)` keys to occurrence counts. A
//! [`SuggestionEngine`] scans one language of the store for terms within a
//! bounded Damerau-Levenshtein distance of the input and ranks them by
//! distance and frequency according to a [`Verbosity`] mode. The
//! [`ParallelSuggestionEngine`] splits the same scan across a thread pool for
//! large dictionaries.

pub mod cancel;
pub mod config;
pub mod dictionary;
pub mod ingest;
pub mod levenshtein;
pub mod parallel;
pub mod suggest;
pub mod suggestion;
pub mod verbosity;

// Re-export commonly used types
pub use cancel::CancellationToken;
pub use config::{ParallelConfig, SearchConfig};
pub use dictionary::{DEFAULT_LANGUAGE, DictionaryEntry, TermKey, TermStore};
pub use ingest::{count_corpus, count_corpus_file, load_frequencies, load_frequency_file};
pub use levenshtein::{
    DamerauLevenshteinMatcher, damerau_levenshtein_bounded, damerau_levenshtein_distance,
};
pub use parallel::ParallelSuggestionEngine;
pub use suggest::{SearchRequest, SuggestionEngine};
pub use suggestion::Suggestion;
pub use verbosity::Verbosity;
