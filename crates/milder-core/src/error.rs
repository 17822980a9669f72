//! Error types for the matching engine

use thiserror::Error;

/// C status code for a successful call.
pub const STATUS_OK: i32 = 0;
/// C status code for a missing string, buffer or a malformed count.
pub const STATUS_INVALID_ARGUMENT: i32 = -1;
/// C status code for input beyond the configured DP caps.
pub const STATUS_INPUT_TOO_LARGE: i32 = -2;
/// C status code for a failed allocation.
pub const STATUS_RESOURCE_EXHAUSTED: i32 = -3;
/// C status code for a needle that is not a subsequence of the haystack.
pub const STATUS_NO_MATCH: i32 = -4;
/// C status code for a traceback that could not place a needle character.
pub const STATUS_UNTRACEABLE: i32 = -5;

/// Errors that can occur while scoring, tracing or ranking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// A required string or buffer is missing, or a count is malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Needle or haystack exceeds the DP caps
    #[error(
        "input too large: needle {needle_len} (max {max_needle_len}), \
         haystack {haystack_len} (max {max_haystack_len})"
    )]
    InputTooLarge {
        needle_len: usize,
        haystack_len: usize,
        max_needle_len: usize,
        max_haystack_len: usize,
    },

    /// Working memory could not be reserved
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The needle is not a subsequence of the haystack
    #[error("needle is not a subsequence of the haystack")]
    NoMatch,

    /// Traceback found no admissible column for a needle character
    #[error("traceback found no column for needle index {needle_index}")]
    Untraceable { needle_index: usize },

    /// Invalid engine configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl FuzzyError {
    /// Status code reported across the C boundary.
    pub fn status_code(&self) -> i32 {
        match self {
            FuzzyError::InvalidArgument(_) | FuzzyError::Config(_) => STATUS_INVALID_ARGUMENT,
            FuzzyError::InputTooLarge { .. } => STATUS_INPUT_TOO_LARGE,
            FuzzyError::ResourceExhausted(_) => STATUS_RESOURCE_EXHAUSTED,
            FuzzyError::NoMatch => STATUS_NO_MATCH,
            FuzzyError::Untraceable { .. } => STATUS_UNTRACEABLE,
        }
    }
}

impl From<std::collections::TryReserveError> for FuzzyError {
    fn from(err: std::collections::TryReserveError) -> Self {
        FuzzyError::ResourceExhausted(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, FuzzyError>;
