//! Filter on the ship category.

use crate::traits::Filter;
use ship_data::{Ship, ShipType};

/// Keeps ships of exactly one type.
pub struct ShipTypeFilter {
    ship_type: ShipType,
}

impl ShipTypeFilter {
    pub fn new(ship_type: ShipType) -> Self {
        Self { ship_type }
    }
}

impl Filter for ShipTypeFilter {
    fn name(&self) -> &str {
        "ShipTypeFilter"
    }

    fn keep(&self, ship: &Ship) -> bool {
        ship.ship_type == self.ship_type
    }
}
