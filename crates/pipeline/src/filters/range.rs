//! Inclusive range filters over numeric ship fields.

use crate::traits::Filter;
use ship_data::Ship;

/// Numeric field a `RangeFilter` reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipMetric {
    Speed,
    CrewSize,
    Rating,
}

impl ShipMetric {
    fn read(&self, ship: &Ship) -> f64 {
        match self {
            ShipMetric::Speed => ship.speed,
            ShipMetric::CrewSize => f64::from(ship.crew_size),
            ShipMetric::Rating => ship.rating,
        }
    }
}

/// Keeps ships whose metric lies in `[min, max]`.
///
/// ## Algorithm
/// For each ship:
/// 1. Read the metric
/// 2. Reject if below `min` (when set)
/// 3. Reject if above `max` (when set)
///
/// A `min` greater than `max` keeps nothing.
pub struct RangeFilter {
    metric: ShipMetric,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeFilter {
    pub fn new(metric: ShipMetric, min: Option<f64>, max: Option<f64>) -> Self {
        Self { metric, min, max }
    }

    pub fn speed(min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(ShipMetric::Speed, min, max)
    }

    /// Crew sizes are integers; widening to f64 is exact.
    pub fn crew_size(min: Option<i32>, max: Option<i32>) -> Self {
        Self::new(ShipMetric::CrewSize, min.map(f64::from), max.map(f64::from))
    }

    pub fn rating(min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(ShipMetric::Rating, min, max)
    }
}

impl Filter for RangeFilter {
    fn name(&self) -> &str {
        match self.metric {
            ShipMetric::Speed => "SpeedRangeFilter",
            ShipMetric::CrewSize => "CrewSizeRangeFilter",
            ShipMetric::Rating => "RatingRangeFilter",
        }
    }

    fn keep(&self, ship: &Ship) -> bool {
        let value = self.metric.read(ship);
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}
