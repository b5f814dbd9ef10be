//! Ordering of ship listings.

use serde::{Deserialize, Serialize};
use ship_data::Ship;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a listing can be ordered by. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    /// Name of the ship field this order compares
    pub fn field_name(&self) -> &'static str {
        match self {
            ShipOrder::Id => "id",
            ShipOrder::Speed => "speed",
            ShipOrder::Date => "prodDate",
            ShipOrder::Rating => "rating",
        }
    }

    /// Compare two ships on this key
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id.cmp(&b.id),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShipOrder::Id => "ID",
            ShipOrder::Speed => "SPEED",
            ShipOrder::Date => "DATE",
            ShipOrder::Rating => "RATING",
        };
        f.write_str(s)
    }
}

impl FromStr for ShipOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ID" => Ok(ShipOrder::Id),
            "SPEED" => Ok(ShipOrder::Speed),
            "DATE" => Ok(ShipOrder::Date),
            "RATING" => Ok(ShipOrder::Rating),
            other => Err(format!(
                "unknown order '{}', expected one of ID, SPEED, DATE, RATING",
                other
            )),
        }
    }
}

/// Sort ships ascending by `order`.
///
/// The sort is stable, so ships that compare equal keep their relative
/// order. `None` returns the ships untouched.
pub fn sort_ships(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        ships.sort_by(|a, b| order.compare(a, b));
    }
    ships
}
