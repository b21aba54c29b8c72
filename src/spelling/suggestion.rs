//! Suggestion candidates produced by a lookup.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A dictionary term proposed for an input.
///
/// Identity is the term alone: two suggestions for the same term compare
/// equal whatever their distance or frequency, so callers can deduplicate
/// merged result lists with a `HashSet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested term.
    pub term: String,
    /// Edit distance from the input.
    pub distance: usize,
    /// Frequency of the term in the dictionary at lookup time.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(term: S, distance: usize, frequency: u64) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            frequency,
        }
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for Suggestion {}

impl Hash for Suggestion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}
