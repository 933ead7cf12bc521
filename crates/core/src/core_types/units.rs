//! Semantic unit types for type-safe distance and area conversions
//!
//! Units are closed enumerations, so an unrecognized unit can only show up at a
//! boundary (text parsing or FFI codes) and never inside a conversion.
//!
//! # Design Philosophy
//! - One enum per unit family; mixing families is a type error
//! - `Unit` wraps both families for callers that pick units at runtime
//! - Stable `u8` codes (declaration order) for the C ABI
//! - Serde support for batch reports
//!
//! # Usage
//! ```
//! use unit_convert_core::core_types::units::{DistanceUnit, Unit, UnitFamily};
//!
//! let unit: Unit = "km".parse().unwrap();
//! assert_eq!(unit, Unit::Distance(DistanceUnit::Kilometers));
//! assert_eq!(unit.family(), UnitFamily::Distance);
//! assert_eq!(unit.to_string(), "Kilometers");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// UNIT FAMILIES
// ============================================================================

/// Set of units that are mutually convertible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    /// Linear distance (kilometers, miles, meters, feet)
    Distance,
    /// Surface area (hectares, acres)
    Area,
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitFamily::Distance => write!(f, "distance"),
            UnitFamily::Area => write!(f, "area"),
        }
    }
}

/// Behaviour shared by every enumerated unit type.
///
/// All variants of an implementing type belong to the same [`UnitFamily`].
pub trait MeasurementUnit:
    Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Family every variant of this type belongs to
    const FAMILY: UnitFamily;

    /// All variants in declaration order
    const ALL: &'static [Self];

    /// Family of this unit
    #[inline]
    fn family(self) -> UnitFamily {
        Self::FAMILY
    }

    /// Short symbol (`km`, `ha`, ...)
    fn symbol(self) -> &'static str;
}

// ============================================================================
// DISTANCE UNITS
// ============================================================================

/// Linear distance units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Reference unit for distance conversions
    Kilometers = 0,
    /// International mile
    Miles = 1,
    /// SI meter
    Meters = 2,
    /// International foot
    Feet = 3,
}

impl DistanceUnit {
    /// Convert from u8 for FFI
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Kilometers),
            1 => Some(Self::Miles),
            2 => Some(Self::Meters),
            3 => Some(Self::Feet),
            _ => None,
        }
    }

    /// Convert to u8 for FFI
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl MeasurementUnit for DistanceUnit {
    const FAMILY: UnitFamily = UnitFamily::Distance;
    const ALL: &'static [Self] = &[Self::Kilometers, Self::Miles, Self::Meters, Self::Feet];

    fn symbol(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
            Self::Meters => "m",
            Self::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kilometers => "Kilometers",
            Self::Miles => "Miles",
            Self::Meters => "Meters",
            Self::Feet => "Feet",
        };
        f.write_str(name)
    }
}

// ============================================================================
// AREA UNITS
// ============================================================================

/// Surface area units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    /// 10 000 m²
    Hectares = 0,
    /// International acre
    Acres = 1,
}

impl AreaUnit {
    /// Convert from u8 for FFI
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Hectares),
            1 => Some(Self::Acres),
            _ => None,
        }
    }

    /// Convert to u8 for FFI
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl MeasurementUnit for AreaUnit {
    const FAMILY: UnitFamily = UnitFamily::Area;
    const ALL: &'static [Self] = &[Self::Hectares, Self::Acres];

    fn symbol(self) -> &'static str {
        match self {
            Self::Hectares => "ha",
            Self::Acres => "ac",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hectares => "Hectares",
            Self::Acres => "Acres",
        };
        f.write_str(name)
    }
}

// ============================================================================
// ANY UNIT
// ============================================================================

/// A unit from any family, chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Distance(DistanceUnit),
    Area(AreaUnit),
}

impl Unit {
    /// Family of the wrapped unit
    #[must_use]
    pub fn family(self) -> UnitFamily {
        match self {
            Unit::Distance(unit) => unit.family(),
            Unit::Area(unit) => unit.family(),
        }
    }

    /// Short symbol of the wrapped unit
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Distance(unit) => unit.symbol(),
            Unit::Area(unit) => unit.symbol(),
        }
    }
}

impl From<DistanceUnit> for Unit {
    fn from(unit: DistanceUnit) -> Self {
        Unit::Distance(unit)
    }
}

impl From<AreaUnit> for Unit {
    fn from(unit: AreaUnit) -> Self {
        Unit::Area(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Distance(unit) => fmt::Display::fmt(unit, f),
            Unit::Area(unit) => fmt::Display::fmt(unit, f),
        }
    }
}

/// Text that doesn't name a known unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit '{0}' (expected one of: km, mi, m, ft, ha, ac)")]
pub struct ParseUnitError(pub String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    /// Accepts symbols and full names, singular or plural, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                DistanceUnit::Kilometers.into()
            }
            "mi" | "mile" | "miles" => DistanceUnit::Miles.into(),
            "m" | "meter" | "meters" | "metre" | "metres" => DistanceUnit::Meters.into(),
            "ft" | "foot" | "feet" => DistanceUnit::Feet.into(),
            "ha" | "hectare" | "hectares" => AreaUnit::Hectares.into(),
            "ac" | "acre" | "acres" => AreaUnit::Acres.into(),
            _ => return Err(ParseUnitError(s.to_string())),
        };
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_codes_follow_declaration_order() {
        for (code, unit) in DistanceUnit::ALL.iter().enumerate() {
            assert_eq!(usize::from(unit.as_u8()), code);
            assert_eq!(DistanceUnit::from_u8(unit.as_u8()), Some(*unit));
        }
        for (code, unit) in AreaUnit::ALL.iter().enumerate() {
            assert_eq!(usize::from(unit.as_u8()), code);
            assert_eq!(AreaUnit::from_u8(unit.as_u8()), Some(*unit));
        }
        assert_eq!(DistanceUnit::from_u8(4), None);
        assert_eq!(AreaUnit::from_u8(2), None);
    }

    #[test]
    fn test_parse_symbols_and_names() {
        let cases = [
            ("km", Unit::Distance(DistanceUnit::Kilometers)),
            ("Kilometres", Unit::Distance(DistanceUnit::Kilometers)),
            ("MILES", Unit::Distance(DistanceUnit::Miles)),
            (" m ", Unit::Distance(DistanceUnit::Meters)),
            ("foot", Unit::Distance(DistanceUnit::Feet)),
            ("ha", Unit::Area(AreaUnit::Hectares)),
            ("Acre", Unit::Area(AreaUnit::Acres)),
        ];

        for (text, expected) in cases {
            assert_eq!(text.parse::<Unit>(), Ok(expected), "parsing {text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let err = "furlong".parse::<Unit>().unwrap_err();
        assert_eq!(err, ParseUnitError("furlong".to_string()));
        assert!(err.to_string().contains("furlong"));
    }

    #[test]
    fn test_family_and_display() {
        let miles = Unit::from(DistanceUnit::Miles);
        let acres = Unit::from(AreaUnit::Acres);

        assert_eq!(miles.family(), UnitFamily::Distance);
        assert_eq!(acres.family(), UnitFamily::Area);
        assert_eq!(miles.to_string(), "Miles");
        assert_eq!(acres.symbol(), "ac");
    }
}
