//! Milder Fuzzy Matching Library (C ABI)
//!
//! Exposes the milder-core engine to C and other FFI hosts through the
//! functions declared in `include/milder_fuzzy.h`.
//!
//! ## Usage from C
//!
//! ```c
//! int indices[3], count;
//! double scores[3];
//! const char *candidates[] = {"main.rb", "robot.py", "scrub.txt"};
//! if (fuzzy_filter_sort("rb", candidates, 3, indices, scores, &count) == FUZZY_OK) {
//!     ...
//! }
//! ```

// Import logging macros
#[macro_use]
extern crate log;

pub mod ffi;

/// Initialize the logger for the fuzzy matching library.
/// Safe to call more than once; only the first call installs the logger.
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=milder_fuzzy=debug
/// - RUST_LOG=milder_core=trace
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if env_logger::try_init().is_ok() {
            info!("milder fuzzy matching library initialized");
        }
    });
}

pub use ffi::{
    FUZZY_ERR_INPUT_TOO_LARGE, FUZZY_ERR_INVALID_ARGUMENT, FUZZY_ERR_NO_MATCH,
    FUZZY_ERR_RESOURCE_EXHAUSTED, FUZZY_ERR_UNTRACEABLE, FUZZY_OK,
};
