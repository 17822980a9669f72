//! Fuzzy Matching Engine
//!
//! fzy-style subsequence scoring in four parts:
//!
//! 1. Bonus classifier - boundary bonus per haystack position
//! 2. Match scorer - two-matrix DP producing one score
//! 3. Position tracer - backward walk over the same DP
//! 4. Batch ranker - subsequence filter, scoring, stable descending sort
//!
//! # Scores
//!
//! Higher is better. [`SCORE_MIN`] and [`SCORE_MAX`] are reserved: treat the
//! former as "not a comparable match" and the latter as "exact match" rather
//! than as ordinary scores.
//!
//! # Example
//!
//! ```rust
//! use milder_core::fuzzy;
//!
//! let candidates = ["xamoxxxxxxxx", "app/models/user.rb", "readme"];
//! let ranked = fuzzy::filter_sort("amo", &candidates).unwrap();
//! assert_eq!(ranked.iter().map(|e| e.index).collect::<Vec<_>>(), vec![1, 0]);
//! ```

mod bonus;
mod config;
mod engine;
mod matrix;
mod rank;
mod subsequence;
mod traceback;

pub use bonus::{classify, compute_bonus, Boundary};
pub use config::{
    EngineConfig, Limits, ScoringConfig, DEFAULT_PARALLEL_THRESHOLD, MAX_HAYSTACK_LEN,
    MAX_NEEDLE_LEN, SCORE_GAP_INNER, SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CAPITAL,
    SCORE_MATCH_CONSECUTIVE, SCORE_MATCH_DOT, SCORE_MATCH_SLASH, SCORE_MATCH_WORD, SCORE_MAX,
    SCORE_MIN,
};
pub use engine::{Match, Matcher};
pub use matrix::MatchBuffers;
pub use rank::ScoredEntry;

use crate::error::Result;

/// Subsequence test with the default configuration.
pub fn has_match(needle: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> bool {
    subsequence::has_match(needle.as_ref(), haystack.as_ref())
}

/// Score with the default configuration. See [`Matcher::score`].
pub fn score(needle: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> f64 {
    Matcher::new().score(needle, haystack)
}

/// Match positions with the default configuration. See [`Matcher::positions`].
pub fn positions(needle: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> Result<Vec<usize>> {
    Matcher::new().positions(needle, haystack)
}

/// Filter and rank with the default configuration. See [`Matcher::filter_sort`].
pub fn filter_sort<S>(needle: impl AsRef<[u8]>, candidates: &[S]) -> Result<Vec<ScoredEntry>>
where
    S: AsRef<[u8]> + Sync,
{
    Matcher::new().filter_sort(needle, candidates)
}
