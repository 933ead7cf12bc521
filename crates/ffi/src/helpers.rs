use crate::error::{with_last_error_mut, UnitConvertError, UnitConvertErrorCode};
use std::ffi::CString;
use tracing::debug;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
/// Accepts any type implementing `UnitConvertError` trait.
pub(crate) fn set_last_error(error: &impl UnitConvertError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl UnitConvertError) -> UnitConvertErrorCode {
    debug!("FFI call failed: {}", error.msg());
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations so a stale error is never reported.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = UnitConvertErrorCode::Ok;
    });
}
