//! Batch conversion over a fixed matrix of values and unit pairs
//!
//! For each family, every test value is converted between every ordered pair of
//! distinct units. Entries are computed in parallel but always come back in
//! value → source → target order.

use crate::converter::UnitConverter;
use crate::core_types::{AreaUnit, DistanceUnit, MeasurementUnit, Unit};
use crate::error::ConversionError;
use crate::service::ConversionService;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Values converted by every batch run
pub const TEST_VALUES: [f64; 5] = [1.0, 5.0, 10.0, 20.0, 50.0];

/// One conversion of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    pub outcome: Result<f64, ConversionError>,
}

/// Every (value, from, to) request for a family, skipping identity pairs
fn requests<U: MeasurementUnit>(values: &[f64]) -> Vec<(f64, U, U)> {
    values
        .iter()
        .flat_map(|&value| {
            U::ALL.iter().flat_map(move |&from| {
                U::ALL
                    .iter()
                    .filter(move |&&to| to != from)
                    .map(move |&to| (value, from, to))
            })
        })
        .collect()
}

/// Runs the fixed conversion matrix through a [`ConversionService`]
#[derive(Debug, Clone)]
pub struct BatchRunner<'a, D, A> {
    service: &'a ConversionService<D, A>,
    values: &'a [f64],
}

impl<'a, D, A> BatchRunner<'a, D, A>
where
    D: UnitConverter<Unit = DistanceUnit>,
    A: UnitConverter<Unit = AreaUnit>,
{
    /// Runner over [`TEST_VALUES`]
    pub fn new(service: &'a ConversionService<D, A>) -> Self {
        Self {
            service,
            values: &TEST_VALUES,
        }
    }

    /// Runner over caller-chosen values
    pub fn with_values(service: &'a ConversionService<D, A>, values: &'a [f64]) -> Self {
        Self { service, values }
    }

    /// Convert every value between every ordered pair of distinct distance units
    pub fn run_distance(&self) -> Vec<BatchEntry> {
        let entries: Vec<BatchEntry> = requests::<DistanceUnit>(self.values)
            .into_par_iter()
            .map(|(value, from, to)| BatchEntry {
                value,
                from: from.into(),
                to: to.into(),
                outcome: self.service.convert_distance(value, from, to),
            })
            .collect();
        log_summary("distance", &entries);
        entries
    }

    /// Convert every value between every ordered pair of distinct area units
    pub fn run_area(&self) -> Vec<BatchEntry> {
        let entries: Vec<BatchEntry> = requests::<AreaUnit>(self.values)
            .into_par_iter()
            .map(|(value, from, to)| BatchEntry {
                value,
                from: from.into(),
                to: to.into(),
                outcome: self.service.convert_area(value, from, to),
            })
            .collect();
        log_summary("area", &entries);
        entries
    }
}

fn log_summary(family: &str, entries: &[BatchEntry]) {
    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    info!(
        "Batch {} conversions: {} entries, {} failed",
        family,
        entries.len(),
        failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_matrix_skips_identity() {
        let distance = requests::<DistanceUnit>(&TEST_VALUES);
        assert_eq!(distance.len(), TEST_VALUES.len() * 12);
        assert!(distance.iter().all(|(_, from, to)| from != to));

        let area = requests::<AreaUnit>(&TEST_VALUES);
        assert_eq!(area.len(), TEST_VALUES.len() * 2);
    }

    #[test]
    fn test_request_order_is_value_source_target() {
        let distance = requests::<DistanceUnit>(&[1.0, 5.0]);
        assert_eq!(
            &distance[..3],
            &[
                (1.0, DistanceUnit::Kilometers, DistanceUnit::Miles),
                (1.0, DistanceUnit::Kilometers, DistanceUnit::Meters),
                (1.0, DistanceUnit::Kilometers, DistanceUnit::Feet),
            ]
        );
        assert_eq!(
            distance[12],
            (5.0, DistanceUnit::Kilometers, DistanceUnit::Miles)
        );
    }
}
