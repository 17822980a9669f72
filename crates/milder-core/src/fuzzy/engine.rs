//! Matcher - scoring and position tracing for a single candidate

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::{EngineConfig, SCORE_MAX, SCORE_MIN};
use super::matrix::MatchBuffers;
use super::subsequence;
use super::traceback::trace;
use crate::error::Result;

/// Score of one candidate plus the haystack index chosen for each needle byte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub score: f64,
    pub positions: Vec<usize>,
}

/// Fuzzy matcher bound to one [`EngineConfig`]
///
/// Holds no per-call state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: EngineConfig,
}

impl Matcher {
    /// Create a new Matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration, rejecting invalid settings
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Case-insensitive in-order subsequence test. O(n + m), no size cap.
    pub fn has_match(&self, needle: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> bool {
        subsequence::has_match(needle.as_ref(), haystack.as_ref())
    }

    /// Score `haystack` against `needle`; higher is better.
    ///
    /// Returns [`SCORE_MIN`] for an empty needle, for input beyond the size
    /// limits and when the needle is not a subsequence, and [`SCORE_MAX`] for a
    /// case-insensitive exact match (checked before the size limits).
    pub fn score(&self, needle: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> f64 {
        let mut buffers = MatchBuffers::new();
        self.score_in(&mut buffers, needle, haystack)
            .unwrap_or_else(|err| {
                warn!(error = %err, "scoring failed");
                SCORE_MIN
            })
    }

    /// [`Matcher::score`] using caller-owned buffers.
    ///
    /// Only fails when the buffers cannot grow.
    pub fn score_in(
        &self,
        buffers: &mut MatchBuffers,
        needle: impl AsRef<[u8]>,
        haystack: impl AsRef<[u8]>,
    ) -> Result<f64> {
        let (needle, haystack) = (needle.as_ref(), haystack.as_ref());
        if let Some(score) = self.shortcut(needle, haystack) {
            return Ok(score);
        }
        buffers.fill(needle, haystack, &self.config.scoring)?;
        Ok(usable(buffers.final_score()))
    }

    /// Haystack index matched by each needle byte, strictly increasing.
    ///
    /// Empty needle or haystack yields no positions. Fails with
    /// `InputTooLarge` beyond the size limits and `NoMatch` when the needle is
    /// not a subsequence.
    pub fn positions(
        &self,
        needle: impl AsRef<[u8]>,
        haystack: impl AsRef<[u8]>,
    ) -> Result<Vec<usize>> {
        self.match_positions(needle, haystack).map(|m| m.positions)
    }

    /// Score and positions from a single DP run.
    pub fn match_positions(
        &self,
        needle: impl AsRef<[u8]>,
        haystack: impl AsRef<[u8]>,
    ) -> Result<Match> {
        let mut buffers = MatchBuffers::new();
        self.match_positions_in(&mut buffers, needle, haystack)
    }

    /// [`Matcher::match_positions`] using caller-owned buffers.
    pub fn match_positions_in(
        &self,
        buffers: &mut MatchBuffers,
        needle: impl AsRef<[u8]>,
        haystack: impl AsRef<[u8]>,
    ) -> Result<Match> {
        let (needle, haystack) = (needle.as_ref(), haystack.as_ref());
        if needle.is_empty() || haystack.is_empty() {
            return Ok(Match {
                score: SCORE_MIN,
                positions: Vec::new(),
            });
        }
        self.config.limits.check(needle.len(), haystack.len())?;

        buffers.fill(needle, haystack, &self.config.scoring)?;
        let positions = trace(buffers, needle, haystack)?;
        let score = if is_exact(needle, haystack) {
            SCORE_MAX
        } else {
            usable(buffers.final_score())
        };

        Ok(Match { score, positions })
    }

    /// Scores decided without running the DP, in precedence order.
    fn shortcut(&self, needle: &[u8], haystack: &[u8]) -> Option<f64> {
        if needle.is_empty() {
            return Some(SCORE_MIN);
        }
        if is_exact(needle, haystack) {
            return Some(SCORE_MAX);
        }
        if !self.config.limits.admits(needle.len(), haystack.len()) || haystack.is_empty() {
            return Some(SCORE_MIN);
        }
        None
    }
}

#[inline]
fn is_exact(needle: &[u8], haystack: &[u8]) -> bool {
    needle.eq_ignore_ascii_case(haystack)
}

/// Map an unreachable DP result onto the reserved minimum.
#[inline]
fn usable(score: f64) -> f64 {
    if score.is_finite() {
        score
    } else {
        SCORE_MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;
    use crate::fuzzy::config::{Limits, MAX_HAYSTACK_LEN, MAX_NEEDLE_LEN};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_needle_scores_min() {
        let matcher = Matcher::new();
        assert_eq!(matcher.score("", "abc"), SCORE_MIN);
        assert_eq!(matcher.score("", ""), SCORE_MIN);
    }

    #[test]
    fn test_exact_match_scores_max() {
        let matcher = Matcher::new();
        assert_eq!(matcher.score("Main.RS", "main.rs"), SCORE_MAX);
        assert_ne!(matcher.score("main", "main.rs"), SCORE_MAX);
    }

    #[test]
    fn test_exact_match_bypasses_limits() {
        let matcher = Matcher::new();
        let long = "x".repeat(MAX_HAYSTACK_LEN * 2);
        assert_eq!(matcher.score(&long, &long.to_uppercase()), SCORE_MAX);
    }

    #[test]
    fn test_oversized_scores_min() {
        let matcher = Matcher::new();
        let needle = "a".repeat(MAX_NEEDLE_LEN + 1);
        let haystack = "a".repeat(MAX_NEEDLE_LEN + 2);
        assert_eq!(matcher.score(&needle, &haystack), SCORE_MIN);
        assert_eq!(matcher.score("a", "b".repeat(MAX_HAYSTACK_LEN) + "a"), SCORE_MIN);
    }

    #[test]
    fn test_non_subsequence_scores_min() {
        let matcher = Matcher::new();
        assert_eq!(matcher.score("xyz", "abc"), SCORE_MIN);
        assert_eq!(matcher.score("ab", ""), SCORE_MIN);
    }

    #[test]
    fn test_known_score() {
        // a@0: 0.9, m@4 after '/': 0.87 + 0.9, o@5 consecutive: +1.0, 12 trailing gaps
        let score = Matcher::new().score("amo", "app/models/user.rb");
        assert!((score - 2.71).abs() < EPS, "got {}", score);
    }

    #[test]
    fn test_boundary_beats_buried_run() {
        let matcher = Matcher::new();
        let boundary = matcher.score("amo", "app/models/user.rb");
        let buried = matcher.score("amo", "xamoxxxxxxxxxxxxxxx");
        assert!(boundary > buried);
    }

    #[test]
    fn test_case_invariant() {
        let matcher = Matcher::new();
        assert_eq!(matcher.score("amo", "app/models"), matcher.score("AMO", "app/models"));
        // no camel-case transitions in either haystack, so boundaries are unchanged
        assert_eq!(matcher.score("fb", "foo_bar"), matcher.score("FB", "FOO_BAR"));
    }

    #[test]
    fn test_score_in_reuses_buffers() {
        let matcher = Matcher::new();
        let mut buffers = MatchBuffers::new();
        let first = matcher.score_in(&mut buffers, "abc", "a_b_c").unwrap();
        matcher.score_in(&mut buffers, "zz", "xzxz").unwrap();
        let again = matcher.score_in(&mut buffers, "abc", "a_b_c").unwrap();
        assert_eq!(first, again);
        assert_eq!(first, matcher.score("abc", "a_b_c"));
    }

    #[test]
    fn test_positions() {
        let matcher = Matcher::new();
        assert_eq!(matcher.positions("amo", "app/models/user.rb").unwrap(), vec![0, 4, 5]);
        assert_eq!(matcher.positions("FB", "foo_bar").unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_positions_empty_inputs() {
        let matcher = Matcher::new();
        assert!(matcher.positions("", "abc").unwrap().is_empty());
        assert!(matcher.positions("abc", "").unwrap().is_empty());
    }

    #[test]
    fn test_positions_oversized() {
        let matcher = Matcher::new();
        let haystack = "a".repeat(MAX_HAYSTACK_LEN + 1);
        let err = matcher.positions("a", &haystack).unwrap_err();
        assert!(matches!(
            err,
            FuzzyError::InputTooLarge { haystack_len, .. } if haystack_len == MAX_HAYSTACK_LEN + 1
        ));
    }

    #[test]
    fn test_positions_no_match() {
        assert_eq!(Matcher::new().positions("ba", "ab"), Err(FuzzyError::NoMatch));
    }

    #[test]
    fn test_match_positions_agrees_with_score() {
        let matcher = Matcher::new();
        let pairs = [("amo", "app/models/user.rb"), ("rb", "scrub.txt"), ("abc", "ABC")];
        for (needle, haystack) in pairs {
            let m = matcher.match_positions(needle, haystack).unwrap();
            assert_eq!(m.score, matcher.score(needle, haystack));
            assert_eq!(m.positions, matcher.positions(needle, haystack).unwrap());
        }
    }

    #[test]
    fn test_custom_limits() {
        let config = EngineConfig {
            limits: Limits {
                max_needle_len: 2,
                max_haystack_len: 8,
            },
            ..EngineConfig::default()
        };
        let matcher = Matcher::with_config(config).unwrap();
        assert_eq!(matcher.score("abc", "a_b_c"), SCORE_MIN);
        assert!(matcher.score("ab", "a_b_c") > SCORE_MIN);
    }

    #[test]
    fn test_custom_scoring_changes_ranking() {
        let default = Matcher::new();
        assert!(default.score("rb", "rbxx") > default.score("rb", "ra.b"));

        let mut config = EngineConfig::default();
        config.scoring.match_dot = 5.0;
        let matcher = Matcher::with_config(config).unwrap();
        assert!(matcher.score("rb", "ra.b") > matcher.score("rb", "rbxx"));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = EngineConfig::default();
        config.scoring.gap_leading = 1.0;
        assert!(matches!(Matcher::with_config(config), Err(FuzzyError::Config(_))));
    }
}
