//! Area conversion between hectares and acres

use super::UnitConverter;
use crate::core_types::constants::{ACRES_TO_HECTARES, HECTARES_TO_ACRES};
use crate::core_types::AreaUnit;
use crate::error::ConversionError;

/// Converts between hectares and acres with a single direct factor
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaConverter;

impl UnitConverter for AreaConverter {
    type Unit = AreaUnit;

    fn convert(&self, value: f64, from: AreaUnit, to: AreaUnit) -> Result<f64, ConversionError> {
        if !self.can_convert(from, to) {
            return Err(ConversionError::unsupported(&from, &to));
        }

        if from == to {
            return Ok(value);
        }

        match (from, to) {
            (AreaUnit::Hectares, AreaUnit::Acres) => Ok(value * HECTARES_TO_ACRES),
            (AreaUnit::Acres, AreaUnit::Hectares) => Ok(value * ACRES_TO_HECTARES),
            // Identity is handled above; kept so new units fail loudly
            _ => Err(ConversionError::unsupported(&from, &to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::MeasurementUnit;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_areas() {
        let converter = AreaConverter;

        let acres = converter
            .convert(2.0, AreaUnit::Hectares, AreaUnit::Acres)
            .unwrap();
        assert_abs_diff_eq!(acres, 4.9421, epsilon = 0.001);

        let hectares = converter
            .convert(3.0, AreaUnit::Acres, AreaUnit::Hectares)
            .unwrap();
        assert_abs_diff_eq!(hectares, 1.214058, epsilon = 0.001);
    }

    #[test]
    fn test_identity_and_predicate() {
        let converter = AreaConverter;
        for &from in AreaUnit::ALL {
            for &to in AreaUnit::ALL {
                assert!(converter.can_convert(from, to), "{from} -> {to}");
            }
            assert_eq!(converter.convert(-3.25, from, from).unwrap(), -3.25);
            assert_eq!(converter.convert(0.0, from, from).unwrap(), 0.0);
        }
    }
}
