//! Distance conversion through a kilometer reference
//!
//! Every conversion is `from → kilometers → to`, so the factor table grows with
//! the number of units instead of the number of ordered pairs.

use super::UnitConverter;
use crate::core_types::constants::{
    FEET_TO_METERS, KILOMETERS_TO_MILES, METERS_PER_KILOMETER, MILES_TO_KILOMETERS,
};
use crate::core_types::DistanceUnit;
use crate::error::ConversionError;

/// Converts between kilometers, miles, meters and feet
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceConverter;

impl DistanceConverter {
    /// Express `value` given in `unit` in kilometers
    #[inline]
    pub fn to_kilometers(value: f64, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => value * MILES_TO_KILOMETERS,
            DistanceUnit::Meters => value / METERS_PER_KILOMETER,
            DistanceUnit::Feet => value * FEET_TO_METERS / METERS_PER_KILOMETER,
        }
    }

    /// Express a kilometer value in `unit`
    #[inline]
    pub fn from_kilometers(kilometers: f64, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Kilometers => kilometers,
            DistanceUnit::Miles => kilometers * KILOMETERS_TO_MILES,
            DistanceUnit::Meters => kilometers * METERS_PER_KILOMETER,
            DistanceUnit::Feet => kilometers * METERS_PER_KILOMETER / FEET_TO_METERS,
        }
    }
}

impl UnitConverter for DistanceConverter {
    type Unit = DistanceUnit;

    fn convert(
        &self,
        value: f64,
        from: DistanceUnit,
        to: DistanceUnit,
    ) -> Result<f64, ConversionError> {
        if !self.can_convert(from, to) {
            return Err(ConversionError::unsupported(&from, &to));
        }

        if from == to {
            return Ok(value);
        }

        let kilometers = Self::to_kilometers(value, from);
        Ok(Self::from_kilometers(kilometers, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::MeasurementUnit;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_distances() {
        let converter = DistanceConverter;

        let miles = converter
            .convert(10.0, DistanceUnit::Kilometers, DistanceUnit::Miles)
            .unwrap();
        assert_abs_diff_eq!(miles, 6.21371, epsilon = 0.001);

        let feet = converter
            .convert(100.0, DistanceUnit::Meters, DistanceUnit::Feet)
            .unwrap();
        assert_abs_diff_eq!(feet, 328.084, epsilon = 0.001);

        let meters = converter
            .convert(5.0, DistanceUnit::Feet, DistanceUnit::Meters)
            .unwrap();
        assert_abs_diff_eq!(meters, 1.524, epsilon = 0.001);

        let kilometers = converter
            .convert(3.0, DistanceUnit::Miles, DistanceUnit::Kilometers)
            .unwrap();
        assert_abs_diff_eq!(kilometers, 4.82802, epsilon = 0.001);
    }

    #[test]
    fn test_identity_returns_input_exactly() {
        let converter = DistanceConverter;
        for &unit in DistanceUnit::ALL {
            for value in [7.0, 0.0, -12.5, 1e300, f64::MIN_POSITIVE] {
                assert_eq!(converter.convert(value, unit, unit).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_every_pair_is_convertible() {
        // Regression: an inverted predicate rejected every cross-unit pair
        let converter = DistanceConverter;
        for &from in DistanceUnit::ALL {
            for &to in DistanceUnit::ALL {
                assert!(converter.can_convert(from, to), "{from} -> {to}");
                assert!(converter.convert(1.0, from, to).is_ok());
            }
        }
    }

    #[test]
    fn test_reference_unit_steps() {
        assert_abs_diff_eq!(
            DistanceConverter::to_kilometers(2500.0, DistanceUnit::Meters),
            2.5,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            DistanceConverter::to_kilometers(1000.0, DistanceUnit::Feet),
            0.3048,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            DistanceConverter::from_kilometers(1.0, DistanceUnit::Feet),
            3280.84,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_negative_values_scale_linearly() {
        let converter = DistanceConverter;
        let forward = converter
            .convert(42.0, DistanceUnit::Miles, DistanceUnit::Feet)
            .unwrap();
        let backward = converter
            .convert(-42.0, DistanceUnit::Miles, DistanceUnit::Feet)
            .unwrap();
        assert_eq!(forward, -backward);
    }
}
