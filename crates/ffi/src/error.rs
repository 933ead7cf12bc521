use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use unit_convert_core::ConversionError;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait UnitConvertError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> UnitConvertErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `UnitConvertError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultUnitConvertError {
    code: UnitConvertErrorCode,
    msg: String,
}

impl DefaultUnitConvertError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: UnitConvertErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a raw unit code outside the recognized set.
    ///
    /// The source and target are both reported, rendered as names when they are
    /// valid and as `<family> unit code <n>` when they are not.
    pub fn unrecognized_unit(from: &str, to: &str) -> Self {
        ConversionError::unsupported(&from, &to).into()
    }
}

impl From<ConversionError> for DefaultUnitConvertError {
    fn from(error: ConversionError) -> Self {
        Self {
            code: UnitConvertErrorCode::UnsupportedConversion,
            msg: error.to_string(),
        }
    }
}

impl UnitConvertError for DefaultUnitConvertError {
    fn code(&self) -> UnitConvertErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by unit conversion functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitConvertErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// The unit pair can't be converted, or a unit code is outside the recognized set.
    UnsupportedConversion = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, UnitConvertErrorCode)> = const { RefCell::new((None, UnitConvertErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, UnitConvertErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, UnitConvertErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double miles = 0.0;
/// if (unit_convert_distance(10.0, 0, 7, &miles) != Ok) {
///     const char* error = unit_convert_get_last_error();
///     if (error) {
///         printf("Conversion failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn unit_convert_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `UnitConvertErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
///
/// Error codes are stored per-thread, so each thread has its own error state.
#[no_mangle]
pub extern "C" fn unit_convert_get_last_error_code() -> UnitConvertErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
