//! Console rendering of conversion results

use crate::core_types::constants::DISPLAY_PRECISION;
use std::fmt::Display;

/// Renders conversion results for display
pub trait ResultFormatter {
    /// Line for a successful conversion
    fn format_success(
        &self,
        value: f64,
        from: &dyn Display,
        result: f64,
        to: &dyn Display,
    ) -> String;

    /// Line for a conversion that could not be performed
    fn format_error(&self, from: &dyn Display, to: &dyn Display) -> String;
}

/// Fixed-precision formatter used by the console harness
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    precision: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self {
            precision: DISPLAY_PRECISION,
        }
    }
}

impl ResultFormatter for ConsoleFormatter {
    fn format_success(
        &self,
        value: f64,
        from: &dyn Display,
        result: f64,
        to: &dyn Display,
    ) -> String {
        format!(
            "{} {} = {:.*} {}",
            value, from, self.precision, result, to
        )
    }

    fn format_error(&self, from: &dyn Display, to: &dyn Display) -> String {
        format!("Error: Cannot convert from {} to {}", from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{AreaUnit, DistanceUnit};

    #[test]
    fn test_success_uses_four_decimals() {
        let formatter = ConsoleFormatter::default();
        assert_eq!(
            formatter.format_success(10.0, &"km", 6.21371, &"miles"),
            "10 km = 6.2137 miles"
        );
        assert_eq!(
            formatter.format_success(2.5, &AreaUnit::Hectares, 6.177625, &AreaUnit::Acres),
            "2.5 Hectares = 6.1776 Acres"
        );
    }

    #[test]
    fn test_error_line() {
        let formatter = ConsoleFormatter::default();
        assert_eq!(
            formatter.format_error(&DistanceUnit::Feet, &AreaUnit::Acres),
            "Error: Cannot convert from Feet to Acres"
        );
    }
}
