//! Backward walk over a filled DP recovering one haystack index per needle byte

use super::matrix::MatchBuffers;
use super::subsequence::chars_match;
use crate::error::{FuzzyError, Result};

/// Recover match positions from `buffers`, which must hold the DP for exactly
/// this needle and haystack (both non-empty).
///
/// The last needle byte goes to the column maximizing `M` in the last row
/// (leftmost on ties). Each earlier byte goes to the column maximizing `M`
/// among reachable matches left of the next chosen position (rightmost on
/// ties).
pub(crate) fn trace(buffers: &MatchBuffers, needle: &[u8], haystack: &[u8]) -> Result<Vec<usize>> {
    let last = needle.len() - 1;

    let mut best_j = 0;
    for j in 1..haystack.len() {
        if buffers.m(last, j) > buffers.m(last, best_j) {
            best_j = j;
        }
    }
    if !buffers.d(last, best_j).is_finite() {
        return Err(FuzzyError::NoMatch);
    }

    let mut positions = Vec::new();
    positions.try_reserve_exact(needle.len())?;
    positions.resize(needle.len(), 0);
    positions[last] = best_j;

    for i in (0..last).rev() {
        let mut found: Option<usize> = None;
        for j in (0..positions[i + 1]).rev() {
            if !chars_match(needle[i], haystack[j]) || !buffers.d(i, j).is_finite() {
                continue;
            }
            if found.map_or(true, |f| buffers.m(i, j) > buffers.m(i, f)) {
                found = Some(j);
            }
        }
        positions[i] = found.ok_or(FuzzyError::Untraceable { needle_index: i })?;
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::config::ScoringConfig;
    use pretty_assertions::assert_eq;

    fn traced(needle: &str, haystack: &str) -> Result<Vec<usize>> {
        let mut buffers = MatchBuffers::new();
        buffers.fill(needle.as_bytes(), haystack.as_bytes(), &ScoringConfig::default())?;
        trace(&buffers, needle.as_bytes(), haystack.as_bytes())
    }

    #[test]
    fn test_prefers_boundaries() {
        assert_eq!(traced("amo", "app/models/user.rb").unwrap(), vec![0, 4, 5]);
    }

    #[test]
    fn test_prefers_consecutive_run() {
        assert_eq!(traced("abc", "xabcx").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_last_byte_prefers_earlier_column() {
        // both 'a' columns follow a word break; the earlier one pays fewer leading gaps
        assert_eq!(traced("a", "x_a_a").unwrap(), vec![2]);
    }

    #[test]
    fn test_not_a_subsequence() {
        assert_eq!(traced("ba", "ab"), Err(FuzzyError::NoMatch));
        assert_eq!(traced("z", "abc"), Err(FuzzyError::NoMatch));
    }

    #[test]
    fn test_positions_strictly_increase() {
        let positions = traced("aaa", "a_a_a_a").unwrap();
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
