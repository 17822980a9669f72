//! Scoring constants, DP caps and engine configuration

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Reserved score: "no usable score" (empty needle, no match, oversized input).
pub const SCORE_MIN: f64 = -1e9;
/// Reserved score: exact case-insensitive match.
pub const SCORE_MAX: f64 = 1e9;

pub const SCORE_GAP_LEADING: f64 = -0.005;
pub const SCORE_GAP_TRAILING: f64 = -0.005;
pub const SCORE_GAP_INNER: f64 = -0.01;
pub const SCORE_MATCH_CONSECUTIVE: f64 = 1.0;
pub const SCORE_MATCH_SLASH: f64 = 0.9;
pub const SCORE_MATCH_WORD: f64 = 0.8;
pub const SCORE_MATCH_CAPITAL: f64 = 0.7;
pub const SCORE_MATCH_DOT: f64 = 0.6;

/// Largest needle, in bytes, the DP will score or trace.
pub const MAX_NEEDLE_LEN: usize = 128;
/// Largest haystack, in bytes, the DP will score or trace.
pub const MAX_HAYSTACK_LEN: usize = 1024;

/// Candidate count at which the `parallel` feature switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Gap penalties and boundary bonuses used by the DP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per haystack byte skipped before the first needle byte
    pub gap_leading: f64,
    /// Per haystack byte skipped while placing the last needle byte
    pub gap_trailing: f64,
    /// Per haystack byte skipped while placing any other needle byte
    pub gap_inner: f64,
    pub match_consecutive: f64,
    pub match_slash: f64,
    pub match_word: f64,
    pub match_capital: f64,
    pub match_dot: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_leading: SCORE_GAP_LEADING,
            gap_trailing: SCORE_GAP_TRAILING,
            gap_inner: SCORE_GAP_INNER,
            match_consecutive: SCORE_MATCH_CONSECUTIVE,
            match_slash: SCORE_MATCH_SLASH,
            match_word: SCORE_MATCH_WORD,
            match_capital: SCORE_MATCH_CAPITAL,
            match_dot: SCORE_MATCH_DOT,
        }
    }
}

impl ScoringConfig {
    fn validate(&self) -> Result<()> {
        let gaps = [
            ("gap_leading", self.gap_leading),
            ("gap_trailing", self.gap_trailing),
            ("gap_inner", self.gap_inner),
        ];
        for (name, value) in gaps {
            if !value.is_finite() || value > 0.0 {
                return Err(FuzzyError::Config(format!(
                    "{} must be finite and <= 0, got {}",
                    name, value
                )));
            }
        }

        let bonuses = [
            ("match_consecutive", self.match_consecutive),
            ("match_slash", self.match_slash),
            ("match_word", self.match_word),
            ("match_capital", self.match_capital),
            ("match_dot", self.match_dot),
        ];
        for (name, value) in bonuses {
            if !value.is_finite() || value < 0.0 {
                return Err(FuzzyError::Config(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Size caps bounding the DP working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_needle_len: usize,
    pub max_haystack_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_needle_len: MAX_NEEDLE_LEN,
            max_haystack_len: MAX_HAYSTACK_LEN,
        }
    }
}

impl Limits {
    /// Whether a needle/haystack pair fits the DP working set.
    #[inline]
    pub fn admits(&self, needle_len: usize, haystack_len: usize) -> bool {
        needle_len <= self.max_needle_len && haystack_len <= self.max_haystack_len
    }

    /// Like [`Limits::admits`], reporting the offending sizes.
    pub fn check(&self, needle_len: usize, haystack_len: usize) -> Result<()> {
        if self.admits(needle_len, haystack_len) {
            Ok(())
        } else {
            Err(FuzzyError::InputTooLarge {
                needle_len,
                haystack_len,
                max_needle_len: self.max_needle_len,
                max_haystack_len: self.max_haystack_len,
            })
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub limits: Limits,
    /// Candidate count at which batch ranking goes parallel (`parallel` feature only)
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            limits: Limits::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_needle_len == 0 || self.limits.max_haystack_len == 0 {
            return Err(FuzzyError::Config("size limits must be non-zero".to_string()));
        }
        self.scoring.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_positive_gap_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.gap_inner = 0.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FuzzyError::Config(msg) if msg.starts_with("gap_inner")));
    }

    #[test]
    fn test_nan_bonus_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.match_dot = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = EngineConfig::default();
        config.limits.max_haystack_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits_check() {
        let limits = Limits::default();
        assert!(limits.check(MAX_NEEDLE_LEN, MAX_HAYSTACK_LEN).is_ok());
        assert_eq!(
            limits.check(MAX_NEEDLE_LEN + 1, 4),
            Err(FuzzyError::InputTooLarge {
                needle_len: MAX_NEEDLE_LEN + 1,
                haystack_len: 4,
                max_needle_len: MAX_NEEDLE_LEN,
                max_haystack_len: MAX_HAYSTACK_LEN,
            })
        );
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{"scoring": {"match_dot": 0.3}, "limits": {"max_needle_len": 64}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scoring.match_dot, 0.3);
        assert_eq!(config.scoring.match_slash, SCORE_MATCH_SLASH);
        assert_eq!(config.limits.max_needle_len, 64);
        assert_eq!(config.limits.max_haystack_len, MAX_HAYSTACK_LEN);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
