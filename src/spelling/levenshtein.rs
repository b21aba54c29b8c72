//! Bounded Damerau-Levenshtein distance for spelling correction.
//!
//! Distances are computed over Unicode scalar values (`char`), so a
//! multi-byte character counts as a single edit. The transposition rule is
//! the unrestricted one: a transposed pair may also take part in further
//! edits, so `"ca"` to `"abc"` costs 2.

use std::cmp::min;

use ahash::AHashMap;

/// Calculate the exact Damerau-Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions,
/// substitutions or adjacent transpositions required to turn one string
/// into the other.
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let mut matcher = DamerauLevenshteinMatcher::new(s1);
    let upper = matcher.query_len().max(s2.chars().count());
    // The distance never exceeds the longer length.
    matcher.distance(s2, upper).unwrap_or(upper)
}

/// Calculate Damerau-Levenshtein distance with a maximum threshold.
///
/// Returns `Some(distance)` when the distance is at most `max_distance` and
/// `None` otherwise. The computation stops as soon as it can prove the
/// threshold is exceeded, which is much cheaper than computing the exact
/// value for distant pairs.
pub fn damerau_levenshtein_bounded(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    DamerauLevenshteinMatcher::new(s1).distance(s2, max_distance)
}

/// Reusable matcher for scoring one query against many candidates.
///
/// The query characters and the scratch buffers are kept between calls, so a
/// dictionary scan allocates once per lookup rather than once per entry.
#[derive(Debug, Clone)]
pub struct DamerauLevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
    candidate_chars: Vec<char>,
    matrix: Vec<usize>,
    last_row: AHashMap<char, usize>,
}

impl DamerauLevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        DamerauLevenshteinMatcher {
            query: query.to_string(),
            query_chars: query.chars().collect(),
            candidate_chars: Vec::new(),
            matrix: Vec::new(),
            last_row: AHashMap::new(),
        }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length of the query in characters.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Distance to `candidate`, or `None` if it exceeds `max_distance`.
    pub fn distance(&mut self, candidate: &str, max_distance: usize) -> Option<usize> {
        self.candidate_chars.clear();
        self.candidate_chars.extend(candidate.chars());

        bounded_distance(
            &self.query_chars,
            &self.candidate_chars,
            max_distance,
            &mut self.matrix,
            &mut self.last_row,
        )
    }

    /// Check if a candidate is within the given edit distance.
    pub fn is_match(&mut self, candidate: &str, max_distance: usize) -> bool {
        self.distance(candidate, max_distance).is_some()
    }
}

/// Lowrance-Wagner recurrence with every cell capped at `max_distance + 1`.
///
/// `matrix` is laid out row-major with one sentinel row and column in front:
/// cell `(r, c)` holds the distance between `a[..r - 1]` and `b[..c - 1]`.
/// `last_row` maps a character of `a` to the last row it was seen in.
fn bounded_distance(
    a: &[char],
    b: &[char],
    max_distance: usize,
    matrix: &mut Vec<usize>,
    last_row: &mut AHashMap<char, usize>,
) -> Option<usize> {
    let (n, m) = (a.len(), b.len());

    if n.abs_diff(m) > max_distance {
        return None;
    }
    if n == 0 || m == 0 {
        return Some(n.max(m));
    }
    if a == b {
        return Some(0);
    }

    // Nothing is farther apart than the longer length, so a larger bound
    // only costs work.
    let max_distance = max_distance.min(n.max(m));
    let cap = max_distance + 1;
    let width = m + 2;

    matrix.clear();
    matrix.resize((n + 2) * width, cap);
    for i in 0..=n {
        matrix[(i + 1) * width + 1] = min(i, cap);
    }
    for j in 0..=m {
        matrix[width + j + 1] = min(j, cap);
    }
    last_row.clear();

    // `floor` is the cheapest way a transposition could jump over the
    // current row: min over earlier rows r of (row_min(r) + distance to r).
    let mut floor = cap;
    let mut previous_row_min = 0;

    for i in 1..=n {
        floor = min(floor + 1, previous_row_min + 1);

        let a_char = a[i - 1];
        let row = (i + 1) * width;
        let above = i * width;
        let mut last_match_col = 0;
        let mut row_min = min(i, cap);

        for j in 1..=m {
            let b_char = b[j - 1];
            let k = last_row.get(&b_char).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a_char == b_char {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = matrix[above + j] + cost;
            let insertion = matrix[row + j] + 1;
            let deletion = matrix[above + j + 1] + 1;
            let transposition = matrix[k * width + l] + (i - k - 1) + 1 + (j - l - 1);

            let cell = min(
                min(substitution, transposition),
                min(min(insertion, deletion), cap),
            );
            matrix[row + j + 1] = cell;
            row_min = min(row_min, cell);
        }

        if row_min > max_distance && floor > max_distance {
            return None;
        }

        last_row.insert(a_char, i);
        previous_row_min = row_min;
    }

    let distance = matrix[(n + 1) * width + m + 1];
    (distance <= max_distance).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Textbook unbounded Lowrance-Wagner without caps or early exits.
    fn reference_distance(s1: &str, s2: &str) -> usize {
        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        let (n, m) = (a.len(), b.len());
        let inf = n + m;
        let mut d = vec![vec![inf; m + 2]; n + 2];
        for i in 0..=n {
            d[i + 1][1] = i;
        }
        for j in 0..=m {
            d[1][j + 1] = j;
        }
        let mut da: AHashMap<char, usize> = AHashMap::new();
        for i in 1..=n {
            let mut db = 0;
            for j in 1..=m {
                let k = da.get(&b[j - 1]).copied().unwrap_or(0);
                let l = db;
                let cost = if a[i - 1] == b[j - 1] {
                    db = j;
                    0
                } else {
                    1
                };
                d[i + 1][j + 1] = min(
                    min(d[i][j] + cost, d[i + 1][j] + 1),
                    min(d[i][j + 1] + 1, d[k][l] + (i - k - 1) + 1 + (j - l - 1)),
                );
            }
            da.insert(a[i - 1], i);
        }
        d[n + 1][m + 1]
    }

    const WORDS: &[&str] = &[
        "", "a", "ab", "ba", "abc", "ca", "acb", "hello", "helo", "hallo", "yellow",
        "kitten", "sitting", "search", "serach", "abcdef", "badcfe", "café", "cafe",
        "日本語", "日本", "naïve", "naive", "mississippi", "misisipi",
    ];

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1); // transposition
        assert_eq!(damerau_levenshtein_distance("search", "serach"), 1);
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein_distance("abcdef", "badcfe"), 3);
    }

    #[test]
    fn test_unrestricted_transposition() {
        // The optimal string alignment variant would report 3 here.
        assert_eq!(damerau_levenshtein_distance("ca", "abc"), 2);
        assert_eq!(damerau_levenshtein_bounded("ca", "abc", 2), Some(2));
        assert_eq!(damerau_levenshtein_bounded("ca", "abc", 1), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(damerau_levenshtein_distance("café", "cafe"), 1);
        assert_eq!(damerau_levenshtein_distance("日本語", "日本"), 1);
        assert_eq!(damerau_levenshtein_distance("語本日", "日本語"), 2);
        assert_eq!(damerau_levenshtein_bounded("naïve", "naive", 0), None);
        assert_eq!(damerau_levenshtein_bounded("naïve", "naive", 1), Some(1));
    }

    #[test]
    fn test_bounded_threshold() {
        assert_eq!(damerau_levenshtein_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(damerau_levenshtein_bounded("kitten", "sitting", 2), None);
        assert_eq!(damerau_levenshtein_bounded("search", "search", 0), Some(0));
        assert_eq!(damerau_levenshtein_bounded("a", "abc", 1), None);
        assert_eq!(damerau_levenshtein_bounded("a", "ab", 1), Some(1));
        assert_eq!(damerau_levenshtein_bounded("", "abc", 3), Some(3));
        assert_eq!(damerau_levenshtein_bounded("", "abc", 2), None);
        assert_eq!(damerau_levenshtein_bounded("hello", "hello", usize::MAX), Some(0));
        assert_eq!(damerau_levenshtein_bounded("abc", "xyz", usize::MAX), Some(3));
    }

    #[test]
    fn test_bounded_agrees_with_reference() {
        for a in WORDS {
            for b in WORDS {
                let exact = reference_distance(a, b);
                assert_eq!(damerau_levenshtein_distance(a, b), exact, "{a} -> {b}");
                for k in 0..6 {
                    let bounded = damerau_levenshtein_bounded(a, b, k);
                    if exact <= k {
                        assert_eq!(bounded, Some(exact), "{a} -> {b} within {k}");
                    } else {
                        assert_eq!(bounded, None, "{a} -> {b} beyond {k}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_symmetry_and_identity() {
        for a in WORDS {
            assert_eq!(damerau_levenshtein_bounded(a, a, 0), Some(0));
            for b in WORDS {
                for k in 0..4 {
                    assert_eq!(
                        damerau_levenshtein_bounded(a, b, k),
                        damerau_levenshtein_bounded(b, a, k),
                        "{a} <-> {b} at {k}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_matcher_reuse() {
        let mut matcher = DamerauLevenshteinMatcher::new("hello");

        assert_eq!(matcher.query(), "hello");
        assert_eq!(matcher.query_len(), 5);
        assert_eq!(matcher.distance("helo", 2), Some(1));
        assert_eq!(matcher.distance("hallo", 2), Some(1));
        assert_eq!(matcher.distance("yellow", 2), Some(2));
        assert_eq!(matcher.distance("completely_different", 2), None);
        // Scratch state from earlier calls must not leak into later ones.
        assert_eq!(matcher.distance("ehllo", 1), Some(1));
        assert!(matcher.is_match("hell", 1));
        assert!(!matcher.is_match("he", 2));
    }
}
