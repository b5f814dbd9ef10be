//! Field-level validation rules for ships.
//!
//! Each `is_valid_*` predicate is total: a missing value is simply invalid.
//! `validate_draft` and `validate_update` run the same predicates and turn
//! the first failure into a `ShipError::InvalidField`.

use chrono::{DateTime, Datelike, Utc};

use crate::error::{Result, ShipError};
use crate::types::{ShipDraft, ShipField, ShipUpdate};

/// Longest accepted name or planet, in characters
pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;
/// Production years are strictly between these two
pub const PRODUCTION_YEAR_FLOOR: i32 = 2800;
pub const PRODUCTION_YEAR_CEILING: i32 = 3100;

fn is_valid_text(value: Option<&str>) -> bool {
    match value {
        Some(s) => !s.is_empty() && s.chars().count() <= MAX_TEXT_LEN,
        None => false,
    }
}

pub fn is_valid_name(name: Option<&str>) -> bool {
    is_valid_text(name)
}

pub fn is_valid_planet(planet: Option<&str>) -> bool {
    is_valid_text(planet)
}

/// Speed must lie in `[0.01, 0.99]`; NaN never does
pub fn is_valid_speed(speed: Option<f64>) -> bool {
    speed.is_some_and(|v| (MIN_SPEED..=MAX_SPEED).contains(&v))
}

pub fn is_valid_crew_size(crew_size: Option<i32>) -> bool {
    crew_size.is_some_and(|n| (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&n))
}

/// Only the calendar year is checked: 2801 through 3099 inclusive
pub fn is_valid_prod_date(prod_date: Option<DateTime<Utc>>) -> bool {
    prod_date.is_some_and(|d| d.year() > PRODUCTION_YEAR_FLOOR && d.year() < PRODUCTION_YEAR_CEILING)
}

/// Full sanity check for a new ship: every rule above plus a ship type
pub fn is_entity_valid(draft: &ShipDraft) -> bool {
    is_valid_name(draft.name.as_deref())
        && is_valid_planet(draft.planet.as_deref())
        && draft.ship_type.is_some()
        && is_valid_prod_date(draft.prod_date)
        && is_valid_speed(draft.speed)
        && is_valid_crew_size(draft.crew_size)
}

fn invalid(field: ShipField, reason: impl Into<String>) -> ShipError {
    ShipError::InvalidField {
        field,
        reason: reason.into(),
    }
}

fn check_text(field: ShipField, value: Option<&str>) -> Result<()> {
    if is_valid_text(value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("must be 1 to {} characters", MAX_TEXT_LEN),
        ))
    }
}

fn check_prod_date(prod_date: Option<DateTime<Utc>>) -> Result<()> {
    if is_valid_prod_date(prod_date) {
        Ok(())
    } else {
        Err(invalid(
            ShipField::ProdDate,
            format!(
                "year must be after {} and before {}",
                PRODUCTION_YEAR_FLOOR, PRODUCTION_YEAR_CEILING
            ),
        ))
    }
}

fn check_speed(speed: Option<f64>) -> Result<()> {
    if is_valid_speed(speed) {
        Ok(())
    } else {
        Err(invalid(
            ShipField::Speed,
            format!("must be between {} and {}", MIN_SPEED, MAX_SPEED),
        ))
    }
}

fn check_crew_size(crew_size: Option<i32>) -> Result<()> {
    if is_valid_crew_size(crew_size) {
        Ok(())
    } else {
        Err(invalid(
            ShipField::CrewSize,
            format!("must be between {} and {}", MIN_CREW_SIZE, MAX_CREW_SIZE),
        ))
    }
}

/// Validate a creation payload, reporting the first missing or invalid field.
///
/// Fields are checked in the order name, planet, ship type, production date,
/// speed, crew size.
pub fn validate_draft(draft: &ShipDraft) -> Result<()> {
    check_text(ShipField::Name, draft.name.as_deref())?;
    check_text(ShipField::Planet, draft.planet.as_deref())?;
    if draft.ship_type.is_none() {
        return Err(invalid(ShipField::ShipType, "is required"));
    }
    check_prod_date(draft.prod_date)?;
    check_speed(draft.speed)?;
    check_crew_size(draft.crew_size)
}

/// Validate only the fields present on a partial update.
///
/// Absent fields are skipped. `ship_type` and `is_used` have no invalid
/// values once parsed, so they are never rejected here.
pub fn validate_update(update: &ShipUpdate) -> Result<()> {
    if update.name.is_some() {
        check_text(ShipField::Name, update.name.as_deref())?;
    }
    if update.planet.is_some() {
        check_text(ShipField::Planet, update.planet.as_deref())?;
    }
    if update.prod_date.is_some() {
        check_prod_date(update.prod_date)?;
    }
    if update.speed.is_some() {
        check_speed(update.speed)?;
    }
    if update.crew_size.is_some() {
        check_crew_size(update.crew_size)?;
    }
    Ok(())
}
