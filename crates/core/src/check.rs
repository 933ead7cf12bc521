//! Canonical conversion checks
//!
//! A fixed table of known conversions the console harness runs before doing
//! anything else, so a wrong factor shows up as a `FAIL` line immediately.

use crate::converter::UnitConverter;
use crate::core_types::{AreaUnit, DistanceUnit, Unit};
use crate::error::ConversionError;
use crate::service::ConversionService;
use serde::Serialize;

/// Absolute tolerance for approximate checks
pub const CHECK_TOLERANCE: f64 = 0.001;

/// A known conversion and its expected result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub name: &'static str,
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    pub expected: f64,
    /// Require bit-for-bit equality instead of `CHECK_TOLERANCE`
    pub exact: bool,
}

/// Result of running one [`Check`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub expected: f64,
    pub actual: Result<f64, ConversionError>,
    pub passed: bool,
}

const fn distance(
    name: &'static str,
    value: f64,
    from: DistanceUnit,
    to: DistanceUnit,
    expected: f64,
) -> Check {
    Check {
        name,
        value,
        from: Unit::Distance(from),
        to: Unit::Distance(to),
        expected,
        exact: false,
    }
}

const fn area(name: &'static str, value: f64, from: AreaUnit, to: AreaUnit, expected: f64) -> Check {
    Check {
        name,
        value,
        from: Unit::Area(from),
        to: Unit::Area(to),
        expected,
        exact: false,
    }
}

/// The canonical checks, in the order they are reported
pub const CANONICAL_CHECKS: [Check; 6] = [
    distance("10km→miles", 10.0, DistanceUnit::Kilometers, DistanceUnit::Miles, 6.21371),
    distance("100m→feet", 100.0, DistanceUnit::Meters, DistanceUnit::Feet, 328.084),
    area("2ha→acres", 2.0, AreaUnit::Hectares, AreaUnit::Acres, 4.9421),
    distance("5feet→meters", 5.0, DistanceUnit::Feet, DistanceUnit::Meters, 1.524),
    Check {
        exact: true,
        ..distance("7km→km", 7.0, DistanceUnit::Kilometers, DistanceUnit::Kilometers, 7.0)
    },
    area("3acres→ha", 3.0, AreaUnit::Acres, AreaUnit::Hectares, 1.214058),
];

impl Check {
    /// Run this check through `service`
    pub fn run<D, A>(&self, service: &ConversionService<D, A>) -> CheckOutcome
    where
        D: UnitConverter<Unit = DistanceUnit>,
        A: UnitConverter<Unit = AreaUnit>,
    {
        let actual = service.convert(self.value, self.from, self.to);
        let passed = match actual {
            Ok(result) if self.exact => result == self.expected,
            Ok(result) => (result - self.expected).abs() < CHECK_TOLERANCE,
            Err(_) => false,
        };

        CheckOutcome {
            name: self.name,
            expected: self.expected,
            actual,
            passed,
        }
    }
}

/// Run every check in [`CANONICAL_CHECKS`]
pub fn run_checks<D, A>(service: &ConversionService<D, A>) -> Vec<CheckOutcome>
where
    D: UnitConverter<Unit = DistanceUnit>,
    A: UnitConverter<Unit = AreaUnit>,
{
    CANONICAL_CHECKS
        .iter()
        .map(|check| check.run(service))
        .collect()
}
