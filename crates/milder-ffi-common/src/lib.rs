//! Common FFI utilities for milder C-compatible interfaces.
//!
//! Helpers for reading NUL-terminated byte strings and caller-owned output
//! buffers at the C boundary. Strings are treated as raw bytes; no UTF-8
//! validation is performed.
//!
//! # Memory Ownership
//!
//! Nothing here allocates memory that crosses the boundary:
//! - Input strings stay owned by the caller and are borrowed for the call
//! - Output buffers are caller-allocated; Rust only writes within the length
//!   the caller vouches for

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::slice;

/// Borrow a NUL-terminated C string as bytes (without the terminator).
///
/// # Returns
/// `Ok(&[u8])` on success, `Err(&'static str)` if the pointer is null.
///
/// # Safety
/// The pointer must be valid and NUL-terminated, or null. The returned slice
/// must not outlive the C string.
pub unsafe fn cstr_to_bytes<'a>(ptr: *const c_char) -> Result<&'a [u8], &'static str> {
    if ptr.is_null() {
        return Err("null pointer");
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Borrow a C array of C strings as byte slices.
///
/// Null entries become empty slices, so a missing candidate never matches a
/// non-empty needle but keeps its index.
///
/// # Arguments
/// * `arr` - Pointer to array of C string pointers
/// * `len` - Number of strings in the array (C `int`)
///
/// # Returns
/// `Err` if `len` is negative, or if `arr` is null while `len` is positive.
///
/// # Safety
/// - `arr` must point to `len` C string pointers, or be null when `len` is 0
/// - Each non-null string pointer must be valid and NUL-terminated
pub unsafe fn cstr_array_to_bytes<'a>(
    arr: *const *const c_char,
    len: c_int,
) -> Result<Vec<&'a [u8]>, String> {
    let len = usize::try_from(len).map_err(|_| format!("negative count {}", len))?;
    if len == 0 {
        return Ok(Vec::new());
    }
    if arr.is_null() {
        return Err("null array pointer".to_string());
    }

    let ptrs = unsafe { slice::from_raw_parts(arr, len) };
    let mut result = Vec::new();
    result
        .try_reserve_exact(len)
        .map_err(|e| format!("cannot borrow {} strings: {}", len, e))?;

    for &ptr in ptrs {
        result.push(unsafe { cstr_to_bytes(ptr) }.unwrap_or_default());
    }
    Ok(result)
}

/// Write `values` into a caller-owned C buffer, converting each with `convert`.
///
/// # Returns
/// `Err` if the buffer is null (and `values` is non-empty) or a value does
/// not fit the C type.
///
/// # Safety
/// `out` must point to at least `values.len()` writable elements.
pub unsafe fn write_out<T, U, F>(out: *mut U, values: &[T], convert: F) -> Result<(), String>
where
    T: Copy,
    F: Fn(T) -> Option<U>,
{
    if values.is_empty() {
        return Ok(());
    }
    if out.is_null() {
        return Err("null output buffer".to_string());
    }
    let dst = unsafe { slice::from_raw_parts_mut(out, values.len()) };
    for (slot, &value) in dst.iter_mut().zip(values) {
        *slot = convert(value).ok_or_else(|| "value does not fit output type".to_string())?;
    }
    Ok(())
}

/// Store a scalar through an out-pointer, ignoring null.
///
/// # Safety
/// `out` must be valid for writes, or null.
#[inline]
pub unsafe fn set_out<T>(out: *mut T, value: T) {
    if !out.is_null() {
        unsafe { *out = value };
    }
}

/// Generate a version function that returns a static C string.
///
/// # Example
/// ```ignore
/// milder_ffi_common::define_version_fn!(my_lib_version);
/// // Expands to:
/// // #[no_mangle]
/// // pub extern "C" fn my_lib_version() -> *const c_char {
/// //     concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
/// // }
/// ```
#[macro_export]
macro_rules! define_version_fn {
    ($fn_name:ident) => {
        #[no_mangle]
        pub extern "C" fn $fn_name() -> *const std::os::raw::c_char {
            concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const std::os::raw::c_char
        }
    };
}
