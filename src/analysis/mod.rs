//! Text analysis used when building dictionaries from raw text.

pub mod tokenizer;

pub use tokenizer::{RegexTokenizer, Tokenizer};
