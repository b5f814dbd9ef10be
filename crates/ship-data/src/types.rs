//! Core domain types for the ship registry.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Ship`, the single stored entity
//! - `ShipDraft` and `ShipUpdate`, the client payloads for creating and editing ships
//! - `ShipType` and `ShipField`, closed sets of values

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShipError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a ship, assigned by storage (always positive)
pub type ShipId = u64;

// =============================================================================
// Ship Types
// =============================================================================

/// Category a ship belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    /// Every ship type, in declaration order
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    /// Upper-case name used in `ships.dat` and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShipError::InvalidField {
                field: ShipField::ShipType,
                reason: format!("unknown ship type '{}'", s),
            })
    }
}

/// Names of the client-settable fields that can fail validation.
///
/// `is_used` has no invalid value, so it has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipField {
    Name,
    Planet,
    ShipType,
    ProdDate,
    Speed,
    CrewSize,
}

impl ShipField {
    /// Field name as it appears in JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipField::Name => "name",
            ShipField::Planet => "planet",
            ShipField::ShipType => "shipType",
            ShipField::ProdDate => "prodDate",
            ShipField::Speed => "speed",
            ShipField::CrewSize => "crewSize",
        }
    }
}

impl fmt::Display for ShipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Ship Entity
// =============================================================================

/// A stored ship.
///
/// `id` is `None` until storage assigns one, and never changes afterwards.
/// `rating` is derived from `speed`, `is_used` and the production year; use
/// `RatingPolicy::rate` to compute it rather than setting it by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: Option<ShipId>,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Production timestamp (serialized as epoch milliseconds)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    /// Calendar year of production
    pub fn production_year(&self) -> i32 {
        self.prod_date.year()
    }
}

// =============================================================================
// Client Payloads
// =============================================================================

/// Fields a client sends to create a ship.
///
/// Everything is optional here so that a missing field is reported as a
/// validation failure instead of a deserialization error. `is_used`
/// defaults to `false` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipDraft {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl From<&Ship> for ShipDraft {
    fn from(ship: &Ship) -> Self {
        Self {
            name: Some(ship.name.clone()),
            planet: Some(ship.planet.clone()),
            ship_type: Some(ship.ship_type),
            prod_date: Some(ship.prod_date),
            is_used: Some(ship.is_used),
            speed: Some(ship.speed),
            crew_size: Some(ship.crew_size),
        }
    }
}

/// Partial update of an existing ship; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipUpdate {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl ShipUpdate {
    /// Whether any field that feeds the rating formula is present
    pub fn affects_rating(&self) -> bool {
        self.prod_date.is_some() || self.speed.is_some() || self.is_used.is_some()
    }

    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self == &ShipUpdate::default()
    }
}

/// Parse a ship id from user input.
///
/// Ids are positive integers; zero, negatives and non-numbers are rejected.
pub fn parse_ship_id(raw: &str) -> Result<ShipId, ShipError> {
    match raw.trim().parse::<ShipId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ShipError::InvalidId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ship_type_parsing() {
        assert_eq!("MILITARY".parse::<ShipType>().unwrap(), ShipType::Military);
        assert_eq!("merchant".parse::<ShipType>().unwrap(), ShipType::Merchant);
        assert!("FREIGHTER".parse::<ShipType>().is_err());
    }

    #[test]
    fn test_parse_ship_id() {
        assert_eq!(parse_ship_id("42").unwrap(), 42);
        assert!(matches!(parse_ship_id("0"), Err(ShipError::InvalidId(_))));
        assert!(matches!(parse_ship_id("-3"), Err(ShipError::InvalidId(_))));
        assert!(matches!(parse_ship_id("abc"), Err(ShipError::InvalidId(_))));
    }

    #[test]
    fn test_ship_json_shape() {
        let ship = Ship {
            id: Some(7),
            name: "Orion III".to_string(),
            planet: "Mars".to_string(),
            ship_type: ShipType::Merchant,
            prod_date: Utc.with_ymd_and_hms(2995, 1, 1, 0, 0, 0).unwrap(),
            is_used: true,
            speed: 0.82,
            crew_size: 617,
            rating: 1.31,
        };

        let json = serde_json::to_value(&ship).unwrap();
        assert_eq!(json["shipType"], "MERCHANT");
        assert_eq!(json["isUsed"], true);
        assert_eq!(json["crewSize"], 617);
        assert_eq!(json["prodDate"], ship.prod_date.timestamp_millis());
    }

    #[test]
    fn test_update_affects_rating() {
        let rename = ShipUpdate {
            name: Some("Renamed".to_string()),
            ..ShipUpdate::default()
        };
        assert!(!rename.affects_rating());
        assert!(!rename.is_empty());

        let slower = ShipUpdate {
            speed: Some(0.2),
            ..ShipUpdate::default()
        };
        assert!(slower.affects_rating());
        assert!(ShipUpdate::default().is_empty());
    }
}
