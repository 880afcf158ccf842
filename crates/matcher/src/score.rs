//! Heuristic relevance scoring for ordered-subsequence matches.
//!
//! One left-to-right pass over the candidate both performs the subsequence
//! test and accumulates a score. Ambiguous correspondences (a pattern letter
//! that could match several candidate positions, or a repeated pattern
//! letter) are resolved by keeping a single pending "best letter": later,
//! better-scoring occurrences may displace it until the scan advances past
//! the slot and the choice becomes irrevocable. No backtracking, no
//! recursion; the scan is O(len(candidate)) with O(1) scratch state.

use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::Chars;

/// Bonus for a match immediately following another matched character.
pub const ADJACENCY_BONUS: i32 = 5;
/// Bonus for a match right after `_` or space, or at the very start.
pub const SEPARATOR_BONUS: i32 = 10;
/// Bonus for an uppercase match right after a lowercase character.
pub const CAMEL_BONUS: i32 = 10;
/// Penalty per candidate character before the first match.
pub const LEADING_LETTER_PENALTY: i32 = -3;
/// Floor for the accumulated leading-letter penalty.
pub const MAX_LEADING_LETTER_PENALTY: i32 = -9;
/// Penalty for every candidate character not used by the match.
pub const UNMATCHED_LETTER_PENALTY: i32 = -1;

/// Result of a scored match.
///
/// The score has no intrinsic meaning and no fixed range: it is only a
/// ranking key among outcomes produced for the *same* pattern against
/// different candidates. Scores are not guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The pattern was not found in order.
    Miss,
    /// The pattern was found; carries the heuristic score.
    Match(i32),
}

impl MatchOutcome {
    /// Whether the pattern was fully found in order.
    pub fn is_match(self) -> bool {
        matches!(self, MatchOutcome::Match(_))
    }

    /// The score, if the pattern matched.
    pub fn score(self) -> Option<i32> {
        match self {
            MatchOutcome::Match(score) => Some(score),
            MatchOutcome::Miss => None,
        }
    }
}

/// Per-call scan state: pattern cursor, pending best letter, and the flags
/// feeding next-iteration bonuses.
struct Scorer<'p> {
    pattern: Peekable<Chars<'p>>,
    pattern_pos: usize,
    score: i32,
    prev_matched: bool,
    prev_lower: bool,
    prev_separator: bool,
    /// Pending best letter, folded to ASCII lowercase.
    best_letter: Option<char>,
    best_letter_idx: usize,
    best_letter_score: i32,
    positions: Option<Vec<usize>>,
}

impl<'p> Scorer<'p> {
    fn new(pattern: &'p str, track_positions: bool) -> Self {
        Scorer {
            pattern: pattern.chars().peekable(),
            pattern_pos: 0,
            score: 0,
            prev_matched: false,
            prev_lower: false,
            // The scan starts as if preceded by a separator, so a match on
            // the very first candidate character earns the separator bonus.
            prev_separator: true,
            best_letter: None,
            best_letter_idx: 0,
            best_letter_score: 0,
            positions: track_positions.then(Vec::new),
        }
    }

    fn step(&mut self, idx: usize, ch: char) {
        let pattern_char = self.pattern.peek().copied();
        let pattern_lower = pattern_char.map(|p| p.to_ascii_lowercase());
        let ch_lower = ch.to_ascii_lowercase();

        let next_match = pattern_lower == Some(ch_lower);
        let rematch = self.best_letter == Some(ch_lower);

        // The pending choice becomes irrevocable when the scan advances to a
        // new pattern position, or when the pattern repeats the pending
        // letter and the slot must be freed for the next occurrence.
        let advanced = next_match && self.best_letter.is_some();
        let pattern_repeat = self.best_letter.is_some() && self.best_letter == pattern_lower;
        if advanced || pattern_repeat {
            self.commit_best();
        }

        if next_match || rematch {
            // Leading penalty is charged once, when the first pattern
            // character finds its first viable candidate position.
            if self.pattern_pos == 0 {
                let penalty = (idx as i32 * LEADING_LETTER_PENALTY).max(MAX_LEADING_LETTER_PENALTY);
                self.score += penalty;
            }

            let mut new_score = 0;
            if self.prev_matched {
                new_score += ADJACENCY_BONUS;
            }
            if self.prev_separator {
                new_score += SEPARATOR_BONUS;
            }
            if self.prev_lower && ch.is_ascii_uppercase() {
                new_score += CAMEL_BONUS;
            }

            // Advance the pattern cursor only for a genuine next-match; a
            // rematch merely re-bids for the already-filled slot.
            if next_match {
                self.pattern.next();
                self.pattern_pos += 1;
            }

            // Ties favor the rightmost occurrence seen so far. A displaced
            // pending letter retroactively counts as unmatched.
            if new_score >= self.best_letter_score {
                if self.best_letter.is_some() {
                    self.score += UNMATCHED_LETTER_PENALTY;
                }
                self.best_letter = Some(ch_lower);
                self.best_letter_idx = idx;
                self.best_letter_score = new_score;
            }

            self.prev_matched = true;
        } else {
            self.score += UNMATCHED_LETTER_PENALTY;
            self.prev_matched = false;
        }

        self.prev_lower = ch.is_ascii_lowercase();
        self.prev_separator = ch == '_' || ch == ' ';
    }

    fn commit_best(&mut self) {
        self.score += self.best_letter_score;
        if let Some(positions) = &mut self.positions {
            positions.push(self.best_letter_idx);
        }
        self.best_letter = None;
        self.best_letter_score = 0;
    }

    fn finish(mut self) -> (bool, i32, Option<Vec<usize>>) {
        // A pending best letter at end of scan is final.
        if self.best_letter.is_some() {
            self.commit_best();
        }
        let matched = self.pattern.peek().is_none();
        (matched, self.score, self.positions)
    }
}

/// Score `pattern` against `candidate`.
///
/// Performs the same ordered-subsequence test as
/// [`is_subsequence_match`](crate::is_subsequence_match) and, on a match,
/// returns a heuristic relevance score: tighter, earlier, and
/// word-boundary-aligned matches score higher. Comparison is ASCII
/// case-insensitive; the camel heuristic inspects the candidate's own
/// casing.
///
/// An empty pattern matches any candidate with a score of
/// `-len(candidate)`, since every candidate character goes unmatched.
///
/// # Arguments
/// * `pattern` - Query characters to find
/// * `candidate` - Text to search in
///
/// # Returns
/// [`MatchOutcome::Match`] with the score, or [`MatchOutcome::Miss`]
///
/// # Example
/// ```
/// use quickfind_matcher::{score_match, MatchOutcome};
///
/// assert_eq!(score_match("fbb", "foo_bar_baz"), MatchOutcome::Match(22));
/// assert_eq!(score_match("fbb", "bar_baz"), MatchOutcome::Miss);
/// ```
pub fn score_match(pattern: &str, candidate: &str) -> MatchOutcome {
    let mut scorer = Scorer::new(pattern, false);
    for (idx, ch) in candidate.chars().enumerate() {
        scorer.step(idx, ch);
    }

    let (matched, score, _) = scorer.finish();
    if matched {
        MatchOutcome::Match(score)
    } else {
        MatchOutcome::Miss
    }
}

/// Score `pattern` against `candidate` and report matched positions.
///
/// Same scan as [`score_match`], additionally recording the candidate
/// character index (not byte offset) finally chosen for each pattern
/// character, in ascending order. Useful for highlighting matches in UIs.
///
/// # Returns
/// `Some((score, positions))` on a match, `None` otherwise
///
/// # Example
/// ```
/// use quickfind_matcher::score_match_positions;
///
/// let (score, positions) = score_match_positions("fbb", "foo_bar_baz").unwrap();
/// assert_eq!(score, 22);
/// assert_eq!(positions, vec![0, 4, 8]);
/// ```
pub fn score_match_positions(pattern: &str, candidate: &str) -> Option<(i32, Vec<usize>)> {
    let mut scorer = Scorer::new(pattern, true);
    for (idx, ch) in candidate.chars().enumerate() {
        scorer.step(idx, ch);
    }

    let (matched, score, positions) = scorer.finish();
    matched.then(|| (score, positions.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_score() {
        // Separator bonus at start, then two adjacency bonuses, each
        // committed through the pending slot.
        assert_eq!(score_match("abc", "abc"), MatchOutcome::Match(20));
    }

    #[test]
    fn test_miss_when_out_of_order() {
        assert_eq!(score_match("cba", "abc"), MatchOutcome::Miss);
    }

    #[test]
    fn test_empty_pattern_scores_unmatched_length() {
        assert_eq!(score_match("", "abc"), MatchOutcome::Match(-3));
        assert_eq!(score_match("", ""), MatchOutcome::Match(0));
    }

    #[test]
    fn test_empty_candidate() {
        assert_eq!(score_match("a", ""), MatchOutcome::Miss);
    }

    #[test]
    fn test_case_insensitive_scoring() {
        // Case folding affects matching only; "ABC" has no camel boundary
        // because no uppercase follows a lowercase character.
        assert_eq!(score_match("abc", "ABC"), MatchOutcome::Match(20));
    }

    #[test]
    fn test_contiguous_beats_scattered() {
        let tight = score_match("abc", "abc").score().unwrap();
        let scattered = score_match("abc", "xxxxxxaxxbxxcxxxxxx").score().unwrap();
        assert!(tight > scattered, "{} vs {}", tight, scattered);
    }

    #[test]
    fn test_leading_penalty_floor() {
        // First match at index 6: 6 * -3 floors at -9, then 16 unmatched
        // characters at -1 each.
        assert_eq!(score_match("abc", "xxxxxxaxxbxxcxxxxxx"), MatchOutcome::Match(-25));
    }

    #[test]
    fn test_word_boundary_bonuses() {
        let plain = score_match("gt", "gettext").score().unwrap();
        let separator = score_match("gt", "get_text").score().unwrap();
        let camel = score_match("gt", "getText").score().unwrap();

        // The camel match also sits adjacent to the previous match, so it
        // outranks the separator-aligned one; both beat the plain match.
        assert!(separator > plain, "{} vs {}", separator, plain);
        assert!(camel > separator, "{} vs {}", camel, separator);
        assert_eq!(plain, 11);
        assert_eq!(separator, 15);
        assert_eq!(camel, 21);
    }

    #[test]
    fn test_repeated_letter_pattern() {
        // "aa" is satisfiable by two of the three a's; the pending-slot
        // bookkeeping must terminate and pick a pair.
        assert_eq!(score_match("aa", "banana"), MatchOutcome::Match(-7));
    }

    #[test]
    fn test_separator_aligned_scenario() {
        assert_eq!(score_match("fbb", "foo_bar_baz"), MatchOutcome::Match(22));
    }

    #[test]
    fn test_positions_exact_match() {
        let (score, positions) = score_match_positions("abc", "abc").unwrap();
        assert_eq!(score, 20);
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_positions_prefer_displacing_occurrence() {
        // The final 'a' ties with the pending one and displaces it.
        let (score, positions) = score_match_positions("aa", "banana").unwrap();
        assert_eq!(score, -7);
        assert_eq!(positions, vec![1, 5]);
    }

    #[test]
    fn test_positions_none_on_miss() {
        assert!(score_match_positions("xyz", "abc").is_none());
    }

    #[test]
    fn test_positions_rematch_upgrades_to_camel() {
        // The lowercase 't' fills the slot first; the camel 'T' re-bids
        // with a higher local score and takes it over.
        let (_, positions) = score_match_positions("gt", "getText").unwrap();
        assert_eq!(positions, vec![0, 3]);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(MatchOutcome::Match(-5).is_match());
        assert_eq!(MatchOutcome::Match(-5).score(), Some(-5));
        assert!(!MatchOutcome::Miss.is_match());
        assert_eq!(MatchOutcome::Miss.score(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&MatchOutcome::Match(22)).unwrap();
        let back: MatchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MatchOutcome::Match(22));
    }
}
