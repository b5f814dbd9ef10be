//! Filter on the used flag.

use crate::traits::Filter;
use ship_data::Ship;

/// Keeps only used ships, or only new ones.
pub struct UsedFilter {
    is_used: bool,
}

impl UsedFilter {
    pub fn new(is_used: bool) -> Self {
        Self { is_used }
    }
}

impl Filter for UsedFilter {
    fn name(&self) -> &str {
        "UsedFilter"
    }

    fn keep(&self, ship: &Ship) -> bool {
        ship.is_used == self.is_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_ship;

    #[test]
    fn test_used_filter() {
        let mut used = test_ship(1, "Old Faithful", "Earth");
        used.is_used = true;
        let ships = vec![used, test_ship(2, "Fresh", "Earth")];

        let kept_new = UsedFilter::new(false).apply(ships.clone());
        let kept_used = UsedFilter::new(true).apply(ships);

        assert_eq!(kept_new[0].id, Some(2));
        assert_eq!(kept_used[0].id, Some(1));
    }
}
