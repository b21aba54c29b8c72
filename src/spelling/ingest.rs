//! Building a [`TermStore`] from raw text or frequency lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SpellError};
use crate::spelling::dictionary::TermStore;

/// Count every word of a text corpus into `language`.
///
/// The reader is consumed line by line; each line is tokenized and every
/// word is recorded with [`TermStore::insert_or_increment`] semantics.
/// Returns the number of words counted.
pub fn count_corpus<R: BufRead>(
    reader: R,
    store: &mut TermStore,
    language: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<usize> {
    let mut counted = 0;
    for line in reader.lines() {
        let line = line?;
        counted += store.extend_words(language, tokenizer.tokenize(&line));
    }

    info!(
        "Counted {counted} words into language {language:?} with the {} tokenizer ({} distinct terms)",
        tokenizer.name(),
        store.language_len(language)
    );
    Ok(counted)
}

/// Count every word of a corpus file into `language`.
pub fn count_corpus_file<P: AsRef<Path>>(
    path: P,
    store: &mut TermStore,
    language: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<usize> {
    let path = path.as_ref();
    debug!("Reading corpus {}", path.display());
    let file = File::open(path)?;
    count_corpus(BufReader::new(file), store, language, tokenizer)
}

/// Load a whitespace-separated frequency list into `language`.
///
/// `term_index` and `count_index` name the columns holding the term and its
/// count. Lines with too few columns are skipped. Counts beyond `u64::MAX`
/// clamp to the maximum; negative or unparseable counts skip the line with a
/// warning. A term listed twice keeps the last count. Returns the number of
/// entries loaded.
pub fn load_frequencies<R: BufRead>(
    reader: R,
    store: &mut TermStore,
    language: &str,
    term_index: usize,
    count_index: usize,
) -> Result<usize> {
    if term_index == count_index {
        return Err(SpellError::invalid_argument(
            "term and count columns must differ",
        ));
    }

    let mut loaded = 0;
    let mut skipped = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let columns: Vec<&str> = line.split_whitespace().collect();
        let (Some(term), Some(count)) = (columns.get(term_index), columns.get(count_index)) else {
            if !columns.is_empty() {
                skipped += 1;
            }
            continue;
        };

        match parse_count(count) {
            Some(frequency) => {
                store.set_frequency(language, term, frequency);
                loaded += 1;
            }
            None => {
                warn!(
                    "Skipping line {}: invalid count {count:?} for term {term:?}",
                    number + 1
                );
                skipped += 1;
            }
        }
    }

    info!("Loaded {loaded} frequency entries into language {language:?} ({skipped} lines skipped)");
    Ok(loaded)
}

/// Load a frequency list file into `language`.
pub fn load_frequency_file<P: AsRef<Path>>(
    path: P,
    store: &mut TermStore,
    language: &str,
    term_index: usize,
    count_index: usize,
) -> Result<usize> {
    let path = path.as_ref();
    debug!("Reading frequency list {}", path.display());
    let file = File::open(path)?;
    load_frequencies(BufReader::new(file), store, language, term_index, count_index)
}

/// Parse an unsigned count, clamping overflow to `u64::MAX`.
fn parse_count(text: &str) -> Option<u64> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::analysis::tokenizer::RegexTokenizer;
    use crate::spelling::dictionary::DEFAULT_LANGUAGE;

    #[test]
    fn test_count_corpus() {
        let corpus = "The cat sat.\nthe CAT ran, the end\n\n";
        let tokenizer = RegexTokenizer::new().unwrap();
        let mut store = TermStore::new();

        let counted =
            count_corpus(Cursor::new(corpus), &mut store, DEFAULT_LANGUAGE, &tokenizer).unwrap();

        assert_eq!(counted, 8);
        assert_eq!(store.frequency(DEFAULT_LANGUAGE, "the"), Some(3));
        assert_eq!(store.frequency(DEFAULT_LANGUAGE, "cat"), Some(2));
        assert_eq!(store.frequency(DEFAULT_LANGUAGE, "end"), Some(1));
        assert_eq!(store.language_len(DEFAULT_LANGUAGE), 5);
    }

    #[test]
    fn test_count_corpus_adds_to_existing_counts() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let mut store = TermStore::new();
        store.set_frequency("en", "hello", 10);

        count_corpus(Cursor::new("hello hello"), &mut store, "en", &tokenizer).unwrap();
        assert_eq!(store.frequency("en", "hello"), Some(12));
        assert_eq!(store.frequency(DEFAULT_LANGUAGE, "hello"), None);
    }

    #[test]
    fn test_load_frequencies() {
        let list = "hello 50\nhelo 10\n\nworld\nbad -3\nworse x12\nhelo 11\nhuge 99999999999999999999999\n";
        let mut store = TermStore::new();

        let loaded = load_frequencies(Cursor::new(list), &mut store, "en", 0, 1).unwrap();

        assert_eq!(loaded, 4);
        assert_eq!(store.frequency("en", "hello"), Some(50));
        assert_eq!(store.frequency("en", "helo"), Some(11));
        assert_eq!(store.frequency("en", "huge"), Some(u64::MAX));
        assert!(!store.contains("en", "world"));
        assert!(!store.contains("en", "bad"));
        assert!(!store.contains("en", "worse"));
    }

    #[test]
    fn test_load_frequencies_custom_columns() {
        let list = "1 50 hello\n2 10 helo\n";
        let mut store = TermStore::new();

        let loaded = load_frequencies(Cursor::new(list), &mut store, "en", 2, 1).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(store.frequency("en", "hello"), Some(50));

        let err = load_frequencies(Cursor::new(list), &mut store, "en", 1, 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_file_variants() {
        let mut corpus = tempfile::NamedTempFile::new().unwrap();
        writeln!(corpus, "spelling spelling checker").unwrap();
        let mut list = tempfile::NamedTempFile::new().unwrap();
        writeln!(list, "checker 7").unwrap();

        let tokenizer = RegexTokenizer::new().unwrap();
        let mut store = TermStore::new();
        assert_eq!(count_corpus_file(corpus.path(), &mut store, "", &tokenizer).unwrap(), 3);
        assert_eq!(load_frequency_file(list.path(), &mut store, "", 0, 1).unwrap(), 1);

        assert_eq!(store.frequency("", "spelling"), Some(2));
        assert_eq!(store.frequency("", "checker"), Some(7));

        let missing = load_frequency_file("/nonexistent/freq.txt", &mut store, "", 0, 1);
        assert!(matches!(missing, Err(SpellError::Io(_))));
        let missing = count_corpus_file("/nonexistent/corpus.txt", &mut store, "", &tokenizer);
        assert!(matches!(missing, Err(SpellError::Io(_))));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count("+7"), Some(7));
        assert_eq!(parse_count("18446744073709551616"), Some(u64::MAX));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count(""), None);
    }
}
