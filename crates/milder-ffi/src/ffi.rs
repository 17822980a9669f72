//! C-compatible FFI interface for the milder matching engine
//!
//! Strings are NUL-terminated byte strings, borrowed for the duration of the
//! call. Output buffers are allocated by the caller.
//!
//! # Buffer Rules
//!
//! - `fuzzy_filter_sort`: `out_indices` and `out_scores` hold at least
//!   `num_candidates` elements
//! - `fuzzy_positions`: `out_positions` holds at least `strlen(needle)` elements
//! - Nothing is written to output buffers when a call fails, except
//!   `*out_count = 0` where documented

use std::os::raw::{c_char, c_int};

use milder_core::error::{
    STATUS_INPUT_TOO_LARGE, STATUS_INVALID_ARGUMENT, STATUS_NO_MATCH, STATUS_OK,
    STATUS_RESOURCE_EXHAUSTED, STATUS_UNTRACEABLE,
};
use milder_core::fuzzy::{Matcher, ScoredEntry, SCORE_MIN};
use milder_ffi_common::{cstr_array_to_bytes, cstr_to_bytes, set_out, write_out};

pub const FUZZY_OK: c_int = STATUS_OK;
pub const FUZZY_ERR_INVALID_ARGUMENT: c_int = STATUS_INVALID_ARGUMENT;
pub const FUZZY_ERR_INPUT_TOO_LARGE: c_int = STATUS_INPUT_TOO_LARGE;
pub const FUZZY_ERR_RESOURCE_EXHAUSTED: c_int = STATUS_RESOURCE_EXHAUSTED;
pub const FUZZY_ERR_NO_MATCH: c_int = STATUS_NO_MATCH;
pub const FUZZY_ERR_UNTRACEABLE: c_int = STATUS_UNTRACEABLE;

// ============================================================================
// Lifecycle
// ============================================================================

#[no_mangle]
pub extern "C" fn fuzzy_init_logger() {
    crate::init_logger();
}

milder_ffi_common::define_version_fn!(fuzzy_version);

// ============================================================================
// Matching
// ============================================================================

/// Subsequence test. A null needle or haystack never matches.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fuzzy_has_match(needle: *const c_char, haystack: *const c_char) -> bool {
    let (Ok(needle), Ok(haystack)) =
        (unsafe { cstr_to_bytes(needle) }, unsafe { cstr_to_bytes(haystack) })
    else {
        return false;
    };
    Matcher::new().has_match(needle, haystack)
}

/// Match score. A null needle or haystack scores `SCORE_MIN`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fuzzy_score(needle: *const c_char, haystack: *const c_char) -> f64 {
    let (Ok(needle), Ok(haystack)) =
        (unsafe { cstr_to_bytes(needle) }, unsafe { cstr_to_bytes(haystack) })
    else {
        return SCORE_MIN;
    };
    Matcher::new().score(needle, haystack)
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fuzzy_filter_sort(
    needle: *const c_char,
    candidates: *const *const c_char,
    num_candidates: c_int,
    out_indices: *mut c_int,
    out_scores: *mut f64,
    out_count: *mut c_int,
) -> c_int {
    if needle.is_null()
        || candidates.is_null()
        || out_indices.is_null()
        || out_scores.is_null()
        || out_count.is_null()
    {
        warn!("fuzzy_filter_sort: null argument");
        return FUZZY_ERR_INVALID_ARGUMENT;
    }

    let Ok(needle) = (unsafe { cstr_to_bytes(needle) }) else {
        return FUZZY_ERR_INVALID_ARGUMENT;
    };
    let candidates = match unsafe { cstr_array_to_bytes(candidates, num_candidates) } {
        Ok(c) => c,
        Err(e) => {
            warn!("fuzzy_filter_sort: {}", e);
            return FUZZY_ERR_INVALID_ARGUMENT;
        }
    };

    let entries = match Matcher::new().filter_sort(needle, &candidates) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("fuzzy_filter_sort: {}", err);
            return err.status_code();
        }
    };
    let Ok(count) = c_int::try_from(entries.len()) else {
        return FUZZY_ERR_INVALID_ARGUMENT;
    };

    let written = unsafe {
        write_out(out_indices, &entries, |e: ScoredEntry| c_int::try_from(e.index).ok())
            .and_then(|_| write_out(out_scores, &entries, |e: ScoredEntry| Some(e.score)))
    };
    if let Err(e) = written {
        warn!("fuzzy_filter_sort: {}", e);
        return FUZZY_ERR_INVALID_ARGUMENT;
    }

    unsafe { set_out(out_count, count) };
    debug!("fuzzy_filter_sort: {} of {} candidates matched", count, num_candidates);
    FUZZY_OK
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fuzzy_positions(
    needle: *const c_char,
    haystack: *const c_char,
    out_positions: *mut c_int,
    out_count: *mut c_int,
) -> c_int {
    if needle.is_null() || haystack.is_null() || out_positions.is_null() || out_count.is_null() {
        warn!("fuzzy_positions: null argument");
        return FUZZY_ERR_INVALID_ARGUMENT;
    }

    let (Ok(needle), Ok(haystack)) =
        (unsafe { cstr_to_bytes(needle) }, unsafe { cstr_to_bytes(haystack) })
    else {
        return FUZZY_ERR_INVALID_ARGUMENT;
    };

    let positions = match Matcher::new().positions(needle, haystack) {
        Ok(positions) => positions,
        Err(err) => {
            debug!("fuzzy_positions: {}", err);
            unsafe { set_out(out_count, 0) };
            return err.status_code();
        }
    };
    let Ok(count) = c_int::try_from(positions.len()) else {
        unsafe { set_out(out_count, 0) };
        return FUZZY_ERR_INPUT_TOO_LARGE;
    };

    if let Err(e) = unsafe { write_out(out_positions, &positions, |p| c_int::try_from(p).ok()) } {
        warn!("fuzzy_positions: {}", e);
        unsafe { set_out(out_count, 0) };
        return FUZZY_ERR_INVALID_ARGUMENT;
    }

    unsafe { set_out(out_count, count) };
    FUZZY_OK
}
