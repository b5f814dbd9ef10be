//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! `filter_ships` entry point that builds a pipeline from `ShipCriteria`.

use crate::criteria::ShipCriteria;
use crate::filters::{
    ProductionWindowFilter, RangeFilter, ShipTypeFilter, SubstringFilter, UsedFilter,
};
use crate::traits::Filter;
use ship_data::Ship;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(UsedFilter::new(false))
///     .add_filter(RangeFilter::speed(Some(0.3), Some(0.8)));
///
/// let filtered = pipeline.apply(ships);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build a pipeline with one filter per constraint present in `criteria`.
    ///
    /// Absent constraints add no filter, so empty criteria give an empty
    /// pipeline that keeps every ship.
    pub fn from_criteria(criteria: &ShipCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(name) = &criteria.name {
            pipeline = pipeline.add_filter(SubstringFilter::on_name(name.clone()));
        }
        if let Some(planet) = &criteria.planet {
            pipeline = pipeline.add_filter(SubstringFilter::on_planet(planet.clone()));
        }
        if let Some(ship_type) = criteria.ship_type {
            pipeline = pipeline.add_filter(ShipTypeFilter::new(ship_type));
        }
        if criteria.after.is_some() || criteria.before.is_some() {
            pipeline =
                pipeline.add_filter(ProductionWindowFilter::new(criteria.after, criteria.before));
        }
        if let Some(is_used) = criteria.is_used {
            pipeline = pipeline.add_filter(UsedFilter::new(is_used));
        }
        if criteria.min_speed.is_some() || criteria.max_speed.is_some() {
            pipeline = pipeline.add_filter(RangeFilter::speed(criteria.min_speed, criteria.max_speed));
        }
        if criteria.min_crew_size.is_some() || criteria.max_crew_size.is_some() {
            pipeline = pipeline.add_filter(RangeFilter::crew_size(
                criteria.min_crew_size,
                criteria.max_crew_size,
            ));
        }
        if criteria.min_rating.is_some() || criteria.max_rating.is_some() {
            pipeline =
                pipeline.add_filter(RangeFilter::rating(criteria.min_rating, criteria.max_rating));
        }

        pipeline
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the ships.
    ///
    /// ## Algorithm
    /// 1. Start with the input ships
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// Every filter is a pure predicate, so the order they run in does not
    /// change the result.
    pub fn apply(&self, ships: Vec<Ship>) -> Vec<Ship> {
        let mut current = ships;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the ships matching every present constraint in `criteria`,
/// in their original order.
pub fn filter_ships(ships: Vec<Ship>, criteria: &ShipCriteria) -> Vec<Ship> {
    FilterPipeline::from_criteria(criteria).apply(ships)
}
