//! Merging a partial update into a stored ship.
//!
//! ## Algorithm
//! 1. Validate every field present on the update
//! 2. If a rating input changed, compute the new rating from the merged values
//! 3. Only then write the fields (and rating) onto the ship
//!
//! Steps 1 and 2 can fail; step 3 cannot. A failed merge therefore leaves the
//! ship exactly as it was.

use crate::error::Result;
use crate::rating::RatingPolicy;
use crate::types::{Ship, ShipUpdate};
use crate::validation::validate_update;

/// Apply `update` to `ship`, recomputing the rating when speed, usage or
/// production date were supplied.
///
/// Returns whether the rating was recomputed.
pub fn apply_update(ship: &mut Ship, update: &ShipUpdate, policy: &RatingPolicy) -> Result<bool> {
    validate_update(update)?;

    let rating = if update.affects_rating() {
        let mut preview = ship.clone();
        write_fields(&mut preview, update);
        Some(policy.rate(&preview)?)
    } else {
        None
    };

    write_fields(ship, update);
    if let Some(rating) = rating {
        ship.rating = rating;
    }
    Ok(rating.is_some())
}

fn write_fields(ship: &mut Ship, update: &ShipUpdate) {
    if let Some(name) = &update.name {
        ship.name = name.clone();
    }
    if let Some(planet) = &update.planet {
        ship.planet = planet.clone();
    }
    if let Some(ship_type) = update.ship_type {
        ship.ship_type = ship_type;
    }
    if let Some(prod_date) = update.prod_date {
        ship.prod_date = prod_date;
    }
    if let Some(is_used) = update.is_used {
        ship.is_used = is_used;
    }
    if let Some(speed) = update.speed {
        ship.speed = speed;
    }
    if let Some(crew_size) = update.crew_size {
        ship.crew_size = crew_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipError;
    use crate::types::{ShipField, ShipType};
    use chrono::{TimeZone, Utc};

    fn stored_ship() -> Ship {
        Ship {
            id: Some(1),
            name: "Nostromo".to_string(),
            planet: "Thedus".to_string(),
            ship_type: ShipType::Transport,
            prod_date: Utc.with_ymd_and_hms(3018, 3, 1, 0, 0, 0).unwrap(),
            is_used: false,
            speed: 0.5,
            crew_size: 7,
            rating: 20.0,
        }
    }

    #[test]
    fn test_invalid_field_leaves_ship_untouched() {
        let mut ship = stored_ship();
        let update = ShipUpdate {
            name: Some("Sulaco".to_string()),
            speed: Some(1.5),
            ..ShipUpdate::default()
        };

        let err = apply_update(&mut ship, &update, &RatingPolicy::default()).unwrap_err();

        assert_eq!(err.field(), Some(ShipField::Speed));
        assert_eq!(ship, stored_ship(), "No field should be applied on failure");
    }

    #[test]
    fn test_name_change_keeps_rating() {
        let mut ship = stored_ship();
        ship.rating = 99.0;
        let update = ShipUpdate {
            name: Some("Sulaco".to_string()),
            crew_size: Some(12),
            ..ShipUpdate::default()
        };

        let recomputed = apply_update(&mut ship, &update, &RatingPolicy::default()).unwrap();

        assert!(!recomputed);
        assert_eq!(ship.name, "Sulaco");
        assert_eq!(ship.crew_size, 12);
        assert_eq!(ship.rating, 99.0);
    }

    #[test]
    fn test_used_flag_recomputes_rating() {
        let mut ship = stored_ship();
        let update = ShipUpdate {
            is_used: Some(true),
            ..ShipUpdate::default()
        };

        let recomputed = apply_update(&mut ship, &update, &RatingPolicy::default()).unwrap();

        assert!(recomputed);
        assert!(ship.is_used);
        assert_eq!(ship.rating, 10.0);
    }

    #[test]
    fn test_rating_uses_merged_values() {
        let mut ship = stored_ship();
        let update = ShipUpdate {
            speed: Some(0.8),
            prod_date: Some(Utc.with_ymd_and_hms(3015, 1, 1, 0, 0, 0).unwrap()),
            ..ShipUpdate::default()
        };

        apply_update(&mut ship, &update, &RatingPolicy::default()).unwrap();

        // 80 * 0.8 / 5 = 12.8
        assert_eq!(ship.rating, 12.8);
        assert_eq!(ship.id, Some(1));
    }

    #[test]
    fn test_rating_domain_error_leaves_ship_untouched() {
        let mut ship = stored_ship();
        let update = ShipUpdate {
            name: Some("Sulaco".to_string()),
            speed: Some(0.7),
            ..ShipUpdate::default()
        };
        // Production year 3018 is one past this epoch
        let policy = RatingPolicy::new(3017);

        let err = apply_update(&mut ship, &update, &policy).unwrap_err();

        assert!(matches!(err, ShipError::RatingDomain { .. }));
        assert_eq!(ship, stored_ship());
    }
}
