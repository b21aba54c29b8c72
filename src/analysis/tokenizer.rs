//! Tokenizers that split raw text into dictionary words.

use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, SpellError};

/// Default word pattern: runs of Unicode word characters and apostrophes,
/// without the underscore. Words are not split at apostrophes.
pub const DEFAULT_WORD_PATTERN: &str = r"[[\w'’]--_]+";

/// Trait for tokenizers that convert text into words.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into words, in order of appearance.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A regex-based tokenizer that extracts every match as a word.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract words
    pattern: Arc<Regex>,
    /// Whether words are lowercased
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern, lowercasing words.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern, lowercasing words.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpellError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            lowercase: true,
        })
    }

    /// Set whether words are lowercased.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer lowercases words.
    pub fn is_lowercase(&self) -> bool {
        self.lowercase
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        if self.lowercase {
            let lowered = text.to_lowercase();
            self.pattern
                .find_iter(&lowered)
                .map(|m| m.as_str().to_string())
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect()
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
