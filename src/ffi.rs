//! C ABI bindings.
//!
//! Requests and responses are JSON strings. A request is a
//! [`SolveRequest`]; a response is either a [`PostmanTour`] or
//! `{"error": "<message>"}`. Every returned string must be released with
//! [`postman_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde_json::json;

use crate::error::{PostmanError, Result};
use crate::models::PostmanTour;
use crate::solver::SolveRequest;

fn solve_json(input: &str) -> Result<String> {
    let request: SolveRequest =
        serde_json::from_str(input).map_err(|e| PostmanError::Serialization(e.to_string()))?;
    let tour: PostmanTour = request.solve()?;
    serde_json::to_string(&tour).map_err(|e| PostmanError::Serialization(e.to_string()))
}

fn error_json(err: &PostmanError) -> String {
    json!({ "error": err.to_string() }).to_string()
}

/// Solves a JSON-encoded request and returns a JSON-encoded response.
///
/// Returns null only if the response cannot be represented as a C string.
///
/// # Safety
///
/// `input` must be null or point to a valid NUL-terminated string that stays
/// alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn postman_solve_json(input: *const c_char) -> *mut c_char {
    let response = if input.is_null() {
        error_json(&PostmanError::Serialization("null request".to_string()))
    } else {
        // SAFETY: non-null and NUL-terminated per the caller contract.
        match unsafe { CStr::from_ptr(input) }.to_str() {
            Ok(text) => solve_json(text).unwrap_or_else(|e| error_json(&e)),
            Err(e) => error_json(&PostmanError::Serialization(e.to_string())),
        }
    };
    CString::new(response)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Releases a string returned by [`postman_solve_json`].
///
/// # Safety
///
/// `s` must be null or a pointer returned by [`postman_solve_json`] that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn postman_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: produced by `CString::into_raw` and not yet reclaimed.
        drop(unsafe { CString::from_raw(s) });
    }
}
