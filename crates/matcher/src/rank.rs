//! Batch ranking across a candidate corpus.
//!
//! The matcher itself is a pure per-call function; fanning out across many
//! candidates is the caller's job. This module is that caller-side glue:
//! score everything, keep the matches, sort by descending score. With the
//! `parallel` feature (default) the scan runs on rayon.

use crate::{is_subsequence_match, score_match};
use serde::{Deserialize, Serialize};

/// A candidate that matched, with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    /// The matched candidate
    pub item: T,
    /// Relevance score (higher is better, comparable only per pattern)
    pub score: i32,
}

/// Score every candidate against `pattern` and rank the matches.
///
/// # Arguments
/// * `pattern` - Query to score against
/// * `candidates` - Candidate corpus
///
/// # Returns
/// Matching candidates sorted by descending score.
///
/// # Example
/// ```
/// use quickfind_matcher::rank_candidates;
///
/// let corpus = ["gettext", "tag", "getText"];
/// let ranked = rank_candidates("gt", &corpus);
/// assert_eq!(ranked[0].item, "getText");
/// ```
pub fn rank_candidates<'a, S: AsRef<str> + Sync>(
    pattern: &str,
    candidates: &'a [S],
) -> Vec<ScoredCandidate<&'a str>> {
    #[cfg(feature = "parallel")]
    let mut results: Vec<ScoredCandidate<&'a str>> = {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .filter_map(|c| scored(pattern, c.as_ref()))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<ScoredCandidate<&'a str>> = candidates
        .iter()
        .filter_map(|c| scored(pattern, c.as_ref()))
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Candidates that pass the boolean test, in corpus order.
pub fn filter_matches<'a, S: AsRef<str>>(pattern: &str, candidates: &'a [S]) -> Vec<&'a str> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| is_subsequence_match(pattern, c))
        .collect()
}

/// Number of candidates that pass the boolean test.
pub fn count_matches<S: AsRef<str>>(pattern: &str, candidates: &[S]) -> usize {
    candidates
        .iter()
        .filter(|c| is_subsequence_match(pattern, c.as_ref()))
        .count()
}

#[inline]
fn scored<'a>(pattern: &str, candidate: &'a str) -> Option<ScoredCandidate<&'a str>> {
    score_match(pattern, candidate)
        .score()
        .map(|score| ScoredCandidate { item: candidate, score })
}
