//! Query criteria for listing ships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ship_data::ShipType;

/// Optional constraints on a ship listing.
///
/// Every field is independent and `None` means "no constraint". A ship
/// matches when it satisfies all present constraints. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipCriteria {
    /// Case-sensitive substring of the ship name
    pub name: Option<String>,
    /// Case-sensitive substring of the home planet
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Produced at or after this instant (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub after: Option<DateTime<Utc>>,
    /// Produced at or before this instant (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub before: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipCriteria {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self == &ShipCriteria::default()
    }
}
