//! Filter implementations for the ship pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod production;
pub mod range;
pub mod ship_type;
pub mod text;
pub mod used;

// Re-export for convenience
pub use production::ProductionWindowFilter;
pub use range::{RangeFilter, ShipMetric};
pub use ship_type::ShipTypeFilter;
pub use text::{SubstringFilter, TextField};
pub use used::UsedFilter;

/// A valid, unused transport built in 3018 with speed 0.5 and rating 20.0
#[cfg(test)]
pub(crate) fn test_ship(id: ship_data::ShipId, name: &str, planet: &str) -> ship_data::Ship {
    use chrono::{TimeZone, Utc};

    ship_data::Ship {
        id: Some(id),
        name: name.to_string(),
        planet: planet.to_string(),
        ship_type: ship_data::ShipType::Transport,
        prod_date: Utc.with_ymd_and_hms(3018, 1, 1, 0, 0, 0).unwrap(),
        is_used: false,
        speed: 0.5,
        crew_size: 100,
        rating: 20.0,
    }
}
