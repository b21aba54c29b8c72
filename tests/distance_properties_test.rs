use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sarissa_spell::spelling::{
    DamerauLevenshteinMatcher, damerau_levenshtein_bounded, damerau_levenshtein_distance,
};

const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'é', 'ж'];

/// Unrestricted Damerau-Levenshtein over the full matrix, no bound.
fn full_matrix_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    let inf = n + m;

    let mut d = vec![vec![0usize; m + 2]; n + 2];
    d[0][0] = inf;
    for i in 0..=n {
        d[i + 1][0] = inf;
        d[i + 1][1] = i;
    }
    for j in 0..=m {
        d[0][j + 1] = inf;
        d[1][j + 1] = j;
    }

    let mut last_row: HashMap<char, usize> = HashMap::new();
    for i in 1..=n {
        let mut last_col = 0;
        for j in 1..=m {
            let i1 = *last_row.get(&b[j - 1]).unwrap_or(&0);
            let j1 = last_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_col = j;
                0
            } else {
                1
            };
            d[i + 1][j + 1] = (d[i][j] + cost)
                .min(d[i + 1][j] + 1)
                .min(d[i][j + 1] + 1)
                .min(d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1));
        }
        last_row.insert(a[i - 1], i);
    }
    d[n + 1][m + 1]
}

fn random_word(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..8);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn test_unbounded_matches_full_matrix() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2_000 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        assert_eq!(
            damerau_levenshtein_distance(&a, &b),
            full_matrix_distance(&a, &b),
            "{a:?} vs {b:?}"
        );
    }
}

#[test]
fn test_bound_never_understates() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        let truth = full_matrix_distance(&a, &b);

        for bound in 0..5 {
            let bounded = damerau_levenshtein_bounded(&a, &b, bound);
            if truth <= bound {
                assert_eq!(bounded, Some(truth), "{a:?} vs {b:?} within {bound}");
            } else {
                assert_eq!(bounded, None, "{a:?} vs {b:?} within {bound}");
            }
        }
    }
}

#[test]
fn test_symmetry_and_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        for bound in 0..4 {
            assert_eq!(
                damerau_levenshtein_bounded(&a, &b, bound),
                damerau_levenshtein_bounded(&b, &a, bound)
            );
            assert_eq!(damerau_levenshtein_bounded(&a, &a, bound), Some(0));
        }
    }
}

#[test]
fn test_reused_matcher_is_stateless_between_candidates() {
    let mut rng = StdRng::seed_from_u64(1234);
    let query = "abécd";
    let mut matcher = DamerauLevenshteinMatcher::new(query);

    for _ in 0..500 {
        let candidate = random_word(&mut rng);
        let bound = rng.random_range(0..4);
        assert_eq!(
            matcher.distance(&candidate, bound),
            damerau_levenshtein_bounded(query, &candidate, bound),
            "{candidate:?} within {bound}"
        );
    }
}
