//! C ABI for distance and area conversions
//!
//! Units cross the boundary as `u8` codes in declaration order:
//! - Distance: 0 = Kilometers, 1 = Miles, 2 = Meters, 3 = Feet
//! - Area: 0 = Hectares, 1 = Acres
//!
//! Every function returns a [`UnitConvertErrorCode`]. On failure the output is
//! left untouched and the message is available from `unit_convert_get_last_error`.

mod error;
mod helpers;

pub use error::{unit_convert_get_last_error, unit_convert_get_last_error_code, UnitConvertErrorCode};

use error::DefaultUnitConvertError;
use helpers::{clear_last_error, track_error};
use std::fmt::Display;
use unit_convert_core::{convert_area, convert_distance, AreaUnit, DistanceUnit, UnitFamily};

/// Render a decoded unit by name, or its raw code when unrecognized
fn unit_label<U: Display>(unit: Option<U>, family: UnitFamily, code: u8) -> String {
    unit.map_or_else(|| format!("{family} unit code {code}"), |u| u.to_string())
}

/// Decode both unit codes, rejecting the pair if either is unrecognized
fn decode_units<U: Display + Copy>(
    from: u8,
    to: u8,
    family: UnitFamily,
    decode: fn(u8) -> Option<U>,
) -> Result<(U, U), DefaultUnitConvertError> {
    match (decode(from), decode(to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        (from_unit, to_unit) => Err(DefaultUnitConvertError::unrecognized_unit(
            &unit_label(from_unit, family, from),
            &unit_label(to_unit, family, to),
        )),
    }
}

/// Write a successful result or record the failure.
///
/// Caller guarantees `out_result` is non-null and valid for writes.
unsafe fn finish(
    result: Result<f64, DefaultUnitConvertError>,
    out_result: *mut f64,
) -> UnitConvertErrorCode {
    match result {
        Ok(value) => {
            *out_result = value;
            clear_last_error();
            UnitConvertErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Convert a distance between two distance units
///
/// # Parameters
/// - `value`: Value expressed in `from_unit`
/// - `from_unit`, `to_unit`: Distance unit codes (0-3)
/// - `out_result`: Pointer to receive the converted value
///
/// # Returns
/// - `UnitConvertErrorCode::Ok` (0) on success, with `out_result` set
/// - `UnitConvertErrorCode::NullPointer` (1) if `out_result` is null
/// - `UnitConvertErrorCode::UnsupportedConversion` (2) if a unit code is unrecognized
///
/// # Safety
/// `out_result` must be null or a valid pointer to writable `f64` storage
#[no_mangle]
pub unsafe extern "C" fn unit_convert_distance(
    value: f64,
    from_unit: u8,
    to_unit: u8,
    out_result: *mut f64,
) -> UnitConvertErrorCode {
    if out_result.is_null() {
        return track_error(&DefaultUnitConvertError::null_pointer("out_result"));
    }

    let result = decode_units(from_unit, to_unit, UnitFamily::Distance, DistanceUnit::from_u8)
        .and_then(|(from, to)| convert_distance(value, from, to).map_err(Into::into));

    finish(result, out_result)
}

/// Convert an area between two area units
///
/// # Parameters
/// - `value`: Value expressed in `from_unit`
/// - `from_unit`, `to_unit`: Area unit codes (0-1)
/// - `out_result`: Pointer to receive the converted value
///
/// # Returns
/// - `UnitConvertErrorCode::Ok` (0) on success, with `out_result` set
/// - `UnitConvertErrorCode::NullPointer` (1) if `out_result` is null
/// - `UnitConvertErrorCode::UnsupportedConversion` (2) if a unit code is unrecognized
///
/// # Safety
/// `out_result` must be null or a valid pointer to writable `f64` storage
#[no_mangle]
pub unsafe extern "C" fn unit_convert_area(
    value: f64,
    from_unit: u8,
    to_unit: u8,
    out_result: *mut f64,
) -> UnitConvertErrorCode {
    if out_result.is_null() {
        return track_error(&DefaultUnitConvertError::null_pointer("out_result"));
    }

    let result = decode_units(from_unit, to_unit, UnitFamily::Area, AreaUnit::from_u8)
        .and_then(|(from, to)| convert_area(value, from, to).map_err(Into::into));

    finish(result, out_result)
}
