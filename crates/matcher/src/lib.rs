//! Ordered-subsequence fuzzy matching for Quickfind.
//!
//! This crate provides:
//! - A cheap boolean subsequence test
//! - A single-pass heuristic scorer with best-letter ambiguity resolution
//! - Matched-position reporting for highlighting
//! - Batch ranking across a candidate corpus
//!
//! Both matcher entry points are pure functions of `(pattern, candidate)`:
//! they hold no shared or persisted state, so calls are trivially safe to
//! fan out across threads. Ranking a whole corpus is an embarrassingly
//! parallel map performed by the [`rank`] module on the caller's behalf.
//!
//! # Example
//!
//! ```
//! use quickfind_matcher::{is_subsequence_match, score_match, MatchOutcome};
//!
//! assert!(is_subsequence_match("fbb", "foo_bar_baz"));
//! assert!(!is_subsequence_match("fbb", "bar_baz"));
//!
//! // Scores rank candidates against one pattern; higher is better.
//! let tight = score_match("gt", "getText");
//! let loose = score_match("gt", "gettext");
//! assert!(tight.score() > loose.score());
//! assert_eq!(score_match("zz", "gettext"), MatchOutcome::Miss);
//! ```

mod score;
mod subsequence;

pub mod rank;

pub use rank::{count_matches, filter_matches, rank_candidates, ScoredCandidate};
pub use score::{
    score_match, score_match_positions, MatchOutcome, ADJACENCY_BONUS, CAMEL_BONUS,
    LEADING_LETTER_PENALTY, MAX_LEADING_LETTER_PENALTY, SEPARATOR_BONUS,
    UNMATCHED_LETTER_PENALTY,
};
pub use subsequence::is_subsequence_match;
