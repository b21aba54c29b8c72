//! Frequency dictionary used as the term store for suggestions.
//!
//! Terms are namespaced by an opaque language key. The pair
//! `(language, term)` forms the key; the empty language is the default
//! namespace. Frequencies are `u64` counts that saturate at `u64::MAX`.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Language key of the default namespace.
pub const DEFAULT_LANGUAGE: &str = "";

/// Compound key identifying a term within a language namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TermKey {
    /// Opaque language identifier.
    pub language: String,
    /// The term itself.
    pub term: String,
}

impl TermKey {
    /// Create a new key.
    pub fn new<L: Into<String>, T: Into<String>>(language: L, term: T) -> Self {
        TermKey {
            language: language.into(),
            term: term.into(),
        }
    }

    /// Key in the default namespace.
    pub fn default_language<T: Into<String>>(term: T) -> Self {
        TermKey::new(DEFAULT_LANGUAGE, term)
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language.is_empty() {
            write!(f, "{}", self.term)
        } else {
            write!(f, "{}:{}", self.language, self.term)
        }
    }
}

/// Borrowed view of a single dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry<'a> {
    /// The term.
    pub term: &'a str,
    /// Number of recorded occurrences.
    pub frequency: u64,
    /// Length of the term in characters.
    pub length: usize,
}

/// Stored form of an entry; the character length is cached for pruning.
#[derive(Debug, Clone)]
pub(crate) struct TermRecord {
    pub(crate) term: String,
    pub(crate) frequency: u64,
    pub(crate) length: usize,
}

impl TermRecord {
    pub(crate) fn as_entry(&self) -> DictionaryEntry<'_> {
        DictionaryEntry {
            term: &self.term,
            frequency: self.frequency,
            length: self.length,
        }
    }
}

/// Entries of one language in first-insertion order.
#[derive(Debug, Clone, Default)]
struct Partition {
    index: AHashMap<String, usize>,
    records: Vec<TermRecord>,
    max_length: usize,
}

impl Partition {
    fn record_mut(&mut self, term: &str) -> &mut TermRecord {
        let slot = match self.index.get(term) {
            Some(&slot) => slot,
            None => {
                let length = term.chars().count();
                self.max_length = self.max_length.max(length);
                self.records.push(TermRecord {
                    term: term.to_string(),
                    frequency: 0,
                    length,
                });
                let slot = self.records.len() - 1;
                self.index.insert(term.to_string(), slot);
                slot
            }
        };
        &mut self.records[slot]
    }
}

/// A dictionary that maps `(language, term)` to an occurrence count.
///
/// The store is populated once and then shared read-only with any number of
/// searches; it never evicts entries.
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    partitions: AHashMap<String, Partition>,
}

impl TermStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        TermStore {
            partitions: AHashMap::new(),
        }
    }

    /// Record one occurrence of `term`.
    ///
    /// Inserts the term with frequency 1 when absent, otherwise increments it,
    /// saturating at `u64::MAX`. Returns the frequency after the update.
    /// Empty terms are ignored and report 0.
    pub fn insert_or_increment(&mut self, language: &str, term: &str) -> u64 {
        if term.is_empty() {
            return 0;
        }
        let record = self.partition_mut(language).record_mut(term);
        record.frequency = record.frequency.saturating_add(1);
        record.frequency
    }

    /// Insert `term` or overwrite its frequency with a pre-aggregated count.
    ///
    /// Empty terms are ignored.
    pub fn set_frequency(&mut self, language: &str, term: &str, frequency: u64) {
        if term.is_empty() {
            return;
        }
        self.partition_mut(language).record_mut(term).frequency = frequency;
    }

    /// Count every word of an already tokenized sequence.
    ///
    /// Returns the number of words recorded.
    pub fn extend_words<I, S>(&mut self, language: &str, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let partition = self.partition_mut(language);
        let mut counted = 0;
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            let record = partition.record_mut(word);
            record.frequency = record.frequency.saturating_add(1);
            counted += 1;
        }
        counted
    }

    /// Load pre-aggregated `(term, frequency)` pairs, overwriting existing counts.
    ///
    /// Returns the number of pairs stored.
    pub fn extend_frequencies<I, S>(&mut self, language: &str, pairs: I) -> usize
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let partition = self.partition_mut(language);
        let mut stored = 0;
        for (term, frequency) in pairs {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }
            partition.record_mut(term).frequency = frequency;
            stored += 1;
        }
        stored
    }

    /// Exact lookup of a term's frequency.
    pub fn frequency(&self, language: &str, term: &str) -> Option<u64> {
        let partition = self.partitions.get(language)?;
        partition
            .index
            .get(term)
            .map(|&slot| partition.records[slot].frequency)
    }

    /// Exact lookup by compound key.
    pub fn get(&self, key: &TermKey) -> Option<u64> {
        self.frequency(&key.language, &key.term)
    }

    /// Check if a term exists in the given language.
    pub fn contains(&self, language: &str, term: &str) -> bool {
        self.frequency(language, term).is_some()
    }

    /// Lazily iterate over the entries of one language in insertion order.
    ///
    /// Each call starts a fresh pass; an unknown language yields nothing.
    pub fn scan<'a>(&'a self, language: &str) -> impl Iterator<Item = DictionaryEntry<'a>> + 'a {
        self.records(language).iter().map(TermRecord::as_entry)
    }

    /// Iterate over every entry of every language.
    pub fn iter(&self) -> impl Iterator<Item = (TermKey, u64)> + '_ {
        self.partitions.iter().flat_map(|(language, partition)| {
            partition.records.iter().map(move |record| {
                (
                    TermKey::new(language.as_str(), record.term.as_str()),
                    record.frequency,
                )
            })
        })
    }

    /// Language keys that hold at least one entry.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self
            .partitions
            .iter()
            .filter(|(_, partition)| !partition.records.is_empty())
            .map(|(language, _)| language.as_str())
            .collect();
        languages.sort_unstable();
        languages
    }

    /// Number of distinct terms in one language.
    pub fn language_len(&self, language: &str) -> usize {
        self.records(language).len()
    }

    /// Number of distinct terms across all languages.
    pub fn len(&self) -> usize {
        self.partitions.values().map(|p| p.records.len()).sum()
    }

    /// Check if the store holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in characters of the longest term of a language.
    pub fn max_term_length(&self, language: &str) -> usize {
        self.partitions
            .get(language)
            .map_or(0, |partition| partition.max_length)
    }

    pub(crate) fn records(&self, language: &str) -> &[TermRecord] {
        self.partitions
            .get(language)
            .map_or(&[][..], |partition| partition.records.as_slice())
    }

    fn partition_mut(&mut self, language: &str) -> &mut Partition {
        self.partitions.entry(language.to_string()).or_default()
    }
}
