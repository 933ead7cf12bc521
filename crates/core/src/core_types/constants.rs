//! Conversion factors
//!
//! Distance factors are expressed against kilometers, the reference unit every
//! distance conversion is routed through. Reciprocal pairs are rounded
//! independently, so a round trip is close to, not exactly, the identity.

// ═══════════════════════════════════════════════════════════════════
// DISTANCE
// ═══════════════════════════════════════════════════════════════════

/// Kilometers → miles
pub const KILOMETERS_TO_MILES: f64 = 0.621371;

/// Miles → kilometers
pub const MILES_TO_KILOMETERS: f64 = 1.60934;

/// Meters in one kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Feet → meters (international foot, exact)
pub const FEET_TO_METERS: f64 = 0.3048;

// ═══════════════════════════════════════════════════════════════════
// AREA
// ═══════════════════════════════════════════════════════════════════

/// Hectares → acres
pub const HECTARES_TO_ACRES: f64 = 2.47105;

/// Acres → hectares
pub const ACRES_TO_HECTARES: f64 = 0.404686;

// ═══════════════════════════════════════════════════════════════════
// DISPLAY
// ═══════════════════════════════════════════════════════════════════

/// Decimal places used when rendering a result
pub const DISPLAY_PRECISION: usize = 4;
