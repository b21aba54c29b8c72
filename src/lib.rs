//! # Sarissa Spell
//!
//! Frequency-weighted approximate term lookup for spelling suggestions.
//!
//! ## Features
//!
//! - Per-language dictionaries of term occurrence counts
//! - Bounded Damerau-Levenshtein distance with early termination
//! - Three verbosity modes: top, all best, all within bound
//! - Cancellable lookups and an optional parallel scan
//! - Dictionary building from text corpora and frequency lists
//!
//! ## Example
//!
//! ```
//! use sarissa_spell::prelude::*;
//!
//! let mut store = TermStore::new();
//! store.extend_frequencies(DEFAULT_LANGUAGE, [("hello", 50), ("help", 30), ("world", 40)]);
//!
//! let engine = SuggestionEngine::new(&store);
//! let suggestions = engine.search("helo", 2, Verbosity::Top).unwrap();
//! assert_eq!(suggestions[0].term, "hello");
//! assert_eq!(suggestions[0].distance, 1);
//! ```

pub mod analysis;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{RegexTokenizer, Tokenizer};
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{
        CancellationToken, DEFAULT_LANGUAGE, ParallelConfig, ParallelSuggestionEngine,
        SearchConfig, SearchRequest, Suggestion, SuggestionEngine, TermKey, TermStore, Verbosity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
