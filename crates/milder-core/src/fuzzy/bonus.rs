//! Boundary classification
//!
//! A match that starts right after a separator, a word break or a camel-case
//! transition earns a bonus. The classifier looks only at the byte before the
//! position and the byte at it; position 0 counts as following a slash.

use super::config::ScoringConfig;

/// Kind of boundary preceding a haystack position, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// After `/` or `\`, or at the start of the haystack
    Slash,
    /// After `-`, `_` or a space
    Word,
    /// After `.`
    Dot,
    /// Lowercase byte followed by an uppercase byte
    Capital,
    None,
}

impl Boundary {
    #[inline]
    pub fn bonus(self, scoring: &ScoringConfig) -> f64 {
        match self {
            Boundary::Slash => scoring.match_slash,
            Boundary::Word => scoring.match_word,
            Boundary::Dot => scoring.match_dot,
            Boundary::Capital => scoring.match_capital,
            Boundary::None => 0.0,
        }
    }
}

/// Classify haystack position `i`. Out-of-range positions classify as `None`.
pub fn classify(haystack: &[u8], i: usize) -> Boundary {
    if i == 0 {
        return Boundary::Slash;
    }
    let (Some(&prev), Some(&cur)) = (haystack.get(i - 1), haystack.get(i)) else {
        return Boundary::None;
    };

    match prev {
        b'/' | b'\\' => Boundary::Slash,
        b'-' | b'_' | b' ' => Boundary::Word,
        b'.' => Boundary::Dot,
        _ if prev.is_ascii_lowercase() && cur.is_ascii_uppercase() => Boundary::Capital,
        _ => Boundary::None,
    }
}

/// Bonus for matching at haystack position `i`.
#[inline]
pub fn compute_bonus(haystack: &[u8], i: usize, scoring: &ScoringConfig) -> f64 {
    classify(haystack, i).bonus(scoring)
}
