//! Unit Conversion Core Library
//!
//! Converts values between distance units (kilometers, miles, meters, feet) and
//! area units (hectares, acres).
//!
//! ## Conversions
//!
//! - Distance goes through kilometers as a reference unit: `from → km → to`
//! - Area uses a single direct factor between hectares and acres
//! - Identity conversions return the input unchanged
//! - Units of the same family are always convertible; anything else is a
//!   [`ConversionError::UnsupportedConversion`], never a sentinel value
//!
//! ```
//! use unit_convert_core::{convert_distance, DistanceUnit};
//!
//! let miles = convert_distance(10.0, DistanceUnit::Kilometers, DistanceUnit::Miles).unwrap();
//! assert!((miles - 6.21371).abs() < 1e-3);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Converters and the service built on them
pub mod converter;
pub mod service;

// Console harness support
pub mod batch;
pub mod check;
pub mod format;

// Re-export core types
pub use core_types::{AreaUnit, DistanceUnit, MeasurementUnit, ParseUnitError, Unit, UnitFamily};
pub use error::ConversionError;

// Re-export conversion API
pub use converter::{
    convert_area, convert_distance, convert_units, AreaConverter, DistanceConverter,
    UnitConverter,
};
pub use service::ConversionService;

// Re-export harness support
pub use batch::{BatchEntry, BatchRunner, TEST_VALUES};
pub use check::{run_checks, Check, CheckOutcome, CANONICAL_CHECKS};
pub use format::{ConsoleFormatter, ResultFormatter};
