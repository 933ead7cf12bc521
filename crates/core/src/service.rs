//! Conversion service composing the distance and area converters
//!
//! The service is what the console harness and the batch runner talk to. It
//! adds logging around each conversion and always hands failures back to the
//! caller.

use crate::converter::{AreaConverter, DistanceConverter, UnitConverter};
use crate::core_types::{AreaUnit, DistanceUnit, Unit};
use crate::error::ConversionError;
use tracing::{debug, warn};

/// Front door for conversions of both families
#[derive(Debug, Clone, Default)]
pub struct ConversionService<D = DistanceConverter, A = AreaConverter> {
    distance: D,
    area: A,
}

impl ConversionService {
    /// Service backed by the standard converters
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D, A> ConversionService<D, A>
where
    D: UnitConverter<Unit = DistanceUnit>,
    A: UnitConverter<Unit = AreaUnit>,
{
    /// Service backed by custom converters
    pub fn with_converters(distance: D, area: A) -> Self {
        Self { distance, area }
    }

    /// Convert a distance.
    ///
    /// # Errors
    ///
    /// Propagates [`ConversionError`] from the distance converter.
    pub fn convert_distance(
        &self,
        value: f64,
        from: DistanceUnit,
        to: DistanceUnit,
    ) -> Result<f64, ConversionError> {
        let result = self.distance.convert(value, from, to);
        log_outcome(value, &from, &to, &result);
        result
    }

    /// Convert an area.
    ///
    /// # Errors
    ///
    /// Propagates [`ConversionError`] from the area converter.
    pub fn convert_area(
        &self,
        value: f64,
        from: AreaUnit,
        to: AreaUnit,
    ) -> Result<f64, ConversionError> {
        let result = self.area.convert(value, from, to);
        log_outcome(value, &from, &to, &result);
        result
    }

    /// Convert between runtime-selected units.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedConversion`] when the units belong to
    /// different families, or propagates the family converter's error.
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        match (from, to) {
            (Unit::Distance(from), Unit::Distance(to)) => self.convert_distance(value, from, to),
            (Unit::Area(from), Unit::Area(to)) => self.convert_area(value, from, to),
            _ => {
                let result = Err(ConversionError::unsupported(&from, &to));
                log_outcome(value, &from, &to, &result);
                result
            }
        }
    }
}

fn log_outcome(
    value: f64,
    from: &impl std::fmt::Display,
    to: &impl std::fmt::Display,
    result: &Result<f64, ConversionError>,
) {
    match result {
        Ok(converted) => debug!("Converted {} {} to {} {}", value, from, converted, to),
        Err(e) => warn!("Failed to convert {} {} to {}: {}", value, from, to, e),
    }
}
