//! Ship rating calculation.
//!
//! The rating rewards fast, new, unused ships:
//!
//! ```text
//! rating = round2(80 * speed * k / (current_year - production_year + 1))
//! k      = 0.5 if the ship is used, 1.0 otherwise
//! ```
//!
//! `current_year` anchors every rating to one point in time. It lives on
//! `RatingPolicy` so callers (and tests) can pick any epoch.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShipError};
use crate::types::Ship;

/// Year every rating is measured against unless configured otherwise
pub const DEFAULT_CURRENT_YEAR: i32 = 3019;

const SPEED_WEIGHT: f64 = 80.0;
const USED_FACTOR: f64 = 0.5;
const NEW_FACTOR: f64 = 1.0;

/// Parameters of the rating formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPolicy {
    pub current_year: i32,
}

impl RatingPolicy {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Compute a rating from its three inputs.
    ///
    /// Returns `ShipError::RatingDomain` when the ship was produced exactly one
    /// year after `current_year`. With the default policy validation keeps
    /// production years below that, so hitting it means a caller skipped
    /// validation.
    pub fn calculate(&self, speed: f64, is_used: bool, production_year: i32) -> Result<f64> {
        let age = self.current_year - production_year + 1;
        if age == 0 {
            return Err(ShipError::RatingDomain {
                production_year,
                current_year: self.current_year,
            });
        }

        let k = if is_used { USED_FACTOR } else { NEW_FACTOR };
        Ok(round2(SPEED_WEIGHT * speed * k / age as f64))
    }

    /// Rating for a ship's current speed, usage flag and production year
    pub fn rate(&self, ship: &Ship) -> Result<f64> {
        self.calculate(ship.speed, ship.is_used, ship.production_year())
    }
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENT_YEAR)
    }
}

/// Round half-up to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
