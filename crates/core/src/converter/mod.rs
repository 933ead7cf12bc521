//! Unit converters
//!
//! Each unit family has one converter implementing [`UnitConverter`]:
//! - [`DistanceConverter`]: two-stage conversion through kilometers
//! - [`AreaConverter`]: single direct factor between hectares and acres
//!
//! [`convert_distance`] and [`convert_area`] are the entry points most callers
//! need. [`convert_units`] accepts runtime-selected [`Unit`]s and rejects
//! requests that mix families.

pub mod area;
pub mod distance;

pub use area::AreaConverter;
pub use distance::DistanceConverter;

use crate::core_types::{AreaUnit, DistanceUnit, MeasurementUnit, Unit};
use crate::error::ConversionError;

/// Converter for one family of units
///
/// Implementations hold no mutable state and can be shared freely across threads.
pub trait UnitConverter: Send + Sync {
    /// Unit type this converter understands
    type Unit: MeasurementUnit;

    /// Whether `from` can be converted to `to`.
    ///
    /// Units of the same family are always convertible, including `from == to`.
    fn can_convert(&self, from: Self::Unit, to: Self::Unit) -> bool {
        from.family() == to.family()
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// Identity conversions return `value` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedConversion`] if the pair is not convertible.
    fn convert(&self, value: f64, from: Self::Unit, to: Self::Unit) -> Result<f64, ConversionError>;
}

/// Convert a distance between two distance units
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedConversion`] if the pair is not convertible.
#[inline]
pub fn convert_distance(
    value: f64,
    from: DistanceUnit,
    to: DistanceUnit,
) -> Result<f64, ConversionError> {
    DistanceConverter.convert(value, from, to)
}

/// Convert an area between two area units
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedConversion`] if the pair is not convertible.
#[inline]
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> Result<f64, ConversionError> {
    AreaConverter.convert(value, from, to)
}

/// Convert between runtime-selected units of any family
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedConversion`] if `from` and `to` belong to
/// different families.
pub fn convert_units(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    match (from, to) {
        (Unit::Distance(from), Unit::Distance(to)) => convert_distance(value, from, to),
        (Unit::Area(from), Unit::Area(to)) => convert_area(value, from, to),
        _ => Err(ConversionError::unsupported(&from, &to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_convert_units_dispatches_by_family() {
        let miles = convert_units(10.0, DistanceUnit::Kilometers.into(), DistanceUnit::Miles.into())
            .unwrap();
        assert_abs_diff_eq!(miles, 6.21371, epsilon = 0.001);

        let acres = convert_units(2.0, AreaUnit::Hectares.into(), AreaUnit::Acres.into()).unwrap();
        assert_abs_diff_eq!(acres, 4.9421, epsilon = 0.001);
    }

    #[test]
    fn test_convert_units_rejects_mixed_families() {
        let err = convert_units(1.0, DistanceUnit::Meters.into(), AreaUnit::Hectares.into())
            .unwrap_err();
        assert_eq!(err, ConversionError::unsupported(&"Meters", &"Hectares"));

        let err = convert_units(1.0, AreaUnit::Acres.into(), DistanceUnit::Feet.into())
            .unwrap_err();
        assert_eq!(err.to_string(), "Conversion from Acres to Feet is not supported");
    }
}
