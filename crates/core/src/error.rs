//! Conversion errors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Failure of a single conversion.
///
/// Carries the source and target unit identifiers as rendered text so that
/// raw codes rejected at the FFI boundary can be reported the same way as
/// typed units.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ConversionError {
    #[error("Conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: String, to: String },
}

impl ConversionError {
    /// Build an `UnsupportedConversion` from anything displayable
    pub fn unsupported(from: &impl fmt::Display, to: &impl fmt::Display) -> Self {
        Self::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
