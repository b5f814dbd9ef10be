//! A full listing request: filter, then sort, then slice a page.

use serde::{Deserialize, Serialize};
use ship_data::Ship;

use crate::criteria::ShipCriteria;
use crate::filter_pipeline::filter_ships;
use crate::page::{PageRequest, paginate};
use crate::sort::{ShipOrder, sort_ships};

/// Everything a caller can ask of a ship listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipQuery {
    #[serde(flatten)]
    pub criteria: ShipCriteria,
    pub order: Option<ShipOrder>,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl ShipQuery {
    pub fn new(criteria: ShipCriteria, order: Option<ShipOrder>, page: PageRequest) -> Self {
        Self {
            criteria,
            order,
            page,
        }
    }
}

/// Run a listing over an already-loaded collection.
///
/// Filtering happens before sorting so the sort only sees matching ships,
/// and the page is cut from the sorted result.
pub fn run_query(ships: Vec<Ship>, query: &ShipQuery) -> Vec<Ship> {
    let filtered = filter_ships(ships, &query.criteria);
    let sorted = sort_ships(filtered, query.order);
    paginate(sorted, query.page)
}
