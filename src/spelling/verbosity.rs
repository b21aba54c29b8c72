//! Verbosity modes and the candidate collectors that implement them.
//!
//! A mode decides three things about a lookup: which scored candidates are
//! kept, whether the distance bound tightens as better candidates appear,
//! and how the kept set is ranked and truncated. Each mode maps to one
//! collector type, chosen once per lookup.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::suggestion::Suggestion;

/// Controls how exhaustive and how ranked the returned suggestions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// The single most frequent suggestion of the smallest edit distance.
    #[default]
    Top,
    /// All suggestions of the smallest edit distance, by descending frequency.
    AllBest,
    /// Every suggestion within the bound, by ascending distance and then
    /// descending frequency. Slower: no early termination.
    AllWithinBound,
}

impl Verbosity {
    /// Whether an exact dictionary hit may answer the lookup without a scan.
    pub fn allows_exact_shortcut(self) -> bool {
        !matches!(self, Verbosity::AllWithinBound)
    }

    /// Numeric level: 0 = top, 1 = all best, 2 = all within bound.
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Top => 0,
            Verbosity::AllBest => 1,
            Verbosity::AllWithinBound => 2,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = SpellError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Verbosity::Top),
            1 => Ok(Verbosity::AllBest),
            2 => Ok(Verbosity::AllWithinBound),
            other => Err(SpellError::invalid_argument(format!(
                "unknown verbosity level {other}, expected 0, 1 or 2"
            ))),
        }
    }
}

/// Accumulates scored candidates during a scan.
///
/// Partial collectors built over disjoint slices of the dictionary can be
/// merged in scan order and give the same ranking as a single pass.
pub(crate) trait CandidateCollector: Send + Sized {
    /// Current distance bound for length pruning and distance computation.
    fn bound(&self) -> usize;

    /// Whether an entry with this frequency can be skipped unscored.
    fn prune(&self, frequency: u64) -> bool;

    /// Offer a candidate whose distance is within `bound()`.
    fn offer(&mut self, candidate: Suggestion);

    /// Fold in a collector built over a later part of the scan.
    fn merge(&mut self, other: Self);

    /// Rank and truncate the kept candidates.
    fn finish(self) -> Vec<Suggestion>;
}

/// Keeps only the candidates of the smallest distance seen so far.
///
/// Used by [`Verbosity::Top`] and [`Verbosity::AllBest`].
#[derive(Debug)]
pub(crate) struct BestDistanceCollector {
    bound: usize,
    count_pruning: bool,
    limit: Option<usize>,
    kept: Vec<Suggestion>,
}

impl BestDistanceCollector {
    pub(crate) fn top(max_distance: usize) -> Self {
        BestDistanceCollector {
            bound: max_distance,
            count_pruning: true,
            limit: Some(1),
            kept: Vec::new(),
        }
    }

    pub(crate) fn all_best(max_distance: usize) -> Self {
        BestDistanceCollector {
            bound: max_distance,
            count_pruning: false,
            limit: None,
            kept: Vec::new(),
        }
    }
}

impl CandidateCollector for BestDistanceCollector {
    fn bound(&self) -> usize {
        self.bound
    }

    fn prune(&self, frequency: u64) -> bool {
        // Compared against the first kept candidate only, not the whole set.
        self.count_pruning
            && self
                .kept
                .first()
                .is_some_and(|best| best.distance <= 1 && frequency <= best.frequency)
    }

    fn offer(&mut self, candidate: Suggestion) {
        if let Some(best) = self.kept.first() {
            if candidate.distance > best.distance {
                return;
            }
            if candidate.distance < best.distance {
                self.kept.clear();
            }
        }
        self.bound = candidate.distance;
        self.kept.push(candidate);
    }

    fn merge(&mut self, other: Self) {
        for candidate in other.kept {
            self.offer(candidate);
        }
    }

    fn finish(mut self) -> Vec<Suggestion> {
        self.kept.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        if let Some(limit) = self.limit {
            self.kept.truncate(limit);
        }
        self.kept
    }
}

/// Keeps every candidate within the original bound.
///
/// Used by [`Verbosity::AllWithinBound`]; never tightens and never prunes by
/// frequency.
#[derive(Debug)]
pub(crate) struct WithinBoundCollector {
    max_distance: usize,
    kept: Vec<Suggestion>,
}

impl WithinBoundCollector {
    pub(crate) fn new(max_distance: usize) -> Self {
        WithinBoundCollector {
            max_distance,
            kept: Vec::new(),
        }
    }
}

impl CandidateCollector for WithinBoundCollector {
    fn bound(&self) -> usize {
        self.max_distance
    }

    fn prune(&self, _frequency: u64) -> bool {
        false
    }

    fn offer(&mut self, candidate: Suggestion) {
        self.kept.push(candidate);
    }

    fn merge(&mut self, other: Self) {
        self.kept.extend(other.kept);
    }

    fn finish(mut self) -> Vec<Suggestion> {
        self.kept.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
        });
        self.kept
    }
}
