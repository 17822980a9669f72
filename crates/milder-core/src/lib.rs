//! Milder Core Engine
//!
//! fzy-style fuzzy matching over byte strings: decides whether a needle is an
//! in-order subsequence of a haystack, scores the alignment (contiguity and
//! word/path/camel-case boundaries are rewarded), ranks candidate lists and
//! recovers the matched positions for highlighting.
//!
//! Every operation is a pure, re-entrant computation. Working memory lives in
//! [`MatchBuffers`], owned by the caller or allocated per call.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated subsequence check via memchr
//! - `parallel` - Parallel batch ranking via rayon for large candidate lists
//!
//! # Example
//!
//! ```rust
//! use milder_core::fuzzy::{self, Matcher};
//!
//! assert!(fuzzy::has_match("amo", "app/models/user.rb"));
//! assert!(fuzzy::score("amo", "app/models/user.rb") > fuzzy::score("amo", "xamoxxxxxxxxxxx"));
//!
//! let matcher = Matcher::new();
//! let ranked = matcher.filter_sort("rb", &["main.rb", "robot.py", "scrub.txt"]).unwrap();
//! assert_eq!(ranked[0].index, 0);
//!
//! let positions = matcher.positions("amo", "app/models/user.rb").unwrap();
//! assert_eq!(positions, vec![0, 4, 5]);
//! ```

pub mod error;
pub mod fuzzy;

// Re-export main types at crate root
pub use error::{FuzzyError, Result};
pub use fuzzy::{
    EngineConfig, Limits, Match, MatchBuffers, Matcher, ScoredEntry, ScoringConfig,
    MAX_HAYSTACK_LEN, MAX_NEEDLE_LEN, SCORE_MAX, SCORE_MIN,
};
