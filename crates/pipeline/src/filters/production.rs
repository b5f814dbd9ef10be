//! Filter on the production timestamp.

use crate::traits::Filter;
use chrono::{DateTime, Utc};
use ship_data::Ship;

/// Keeps ships produced inside a time window.
///
/// Both ends are optional and inclusive: a ship produced exactly at `after`
/// or exactly at `before` is kept.
pub struct ProductionWindowFilter {
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl ProductionWindowFilter {
    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Self {
        Self { after, before }
    }
}

impl Filter for ProductionWindowFilter {
    fn name(&self) -> &str {
        "ProductionWindowFilter"
    }

    fn keep(&self, ship: &Ship) -> bool {
        self.after.is_none_or(|after| ship.prod_date >= after)
            && self.before.is_none_or(|before| ship.prod_date <= before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_ship;
    use chrono::TimeZone;

    fn produced(id: u64, year: i32) -> Ship {
        let mut ship = test_ship(id, "Ship", "Earth");
        ship.prod_date = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        ship
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let ships = vec![produced(1, 2900), produced(2, 2950), produced(3, 3000)];
        let after = Utc.with_ymd_and_hms(2950, 1, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap();

        let filtered = ProductionWindowFilter::new(Some(after), Some(before)).apply(ships);

        let ids: Vec<_> = filtered.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_open_ended_window() {
        let ships = vec![produced(1, 2900), produced(2, 3000)];
        let before = Utc.with_ymd_and_hms(2950, 1, 1, 0, 0, 0).unwrap();

        let filtered = ProductionWindowFilter::new(None, Some(before)).apply(ships);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, Some(1));
    }
}
