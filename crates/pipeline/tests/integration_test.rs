//! Integration tests for the pipeline.
//!
//! These tests run filters, sorting and paging together over a
//! realistic fleet loaded from `ships.dat` text.

use pipeline::filters::*;
use pipeline::{FilterPipeline, PageRequest, ShipCriteria, ShipOrder, ShipQuery, run_query};
use ship_data::parser::parse_ships_str;
use ship_data::{Ship, ShipType};

const FLEET: &str = "\
# id::name::planet::type::prodDate::used::speed::crew::rating
1::Orion III::Mars::MERCHANT::32157363600000::true::0.82::617::1.31
2::Daedalus::Earth::MILITARY::32883141600000::false::0.58::3900::3.21
3::Eagle Transporter::Jupiter::TRANSPORT::32472666000000::false::0.7::1296::1.78
4::Star Destroyer::Earth::MILITARY::32757386400000::true::0.97::4997::1.81
5::Serenity::Earth::TRANSPORT::32946991200000::false::0.45::9::3.0
6::Eagle Scout::Mars::MERCHANT::33017205600000::true::0.33::22::1.1
";

fn create_fleet() -> Vec<Ship> {
    parse_ships_str(FLEET, "fleet").unwrap()
}

fn ids(ships: &[Ship]) -> Vec<u64> {
    ships.iter().filter_map(|s| s.id).collect()
}

#[test]
fn test_hand_built_pipeline_matches_criteria_pipeline() {
    let manual = FilterPipeline::new()
        .add_filter(SubstringFilter::on_planet("Earth"))
        .add_filter(ShipTypeFilter::new(ShipType::Military))
        .add_filter(UsedFilter::new(false));

    let criteria = ShipCriteria {
        planet: Some("Earth".to_string()),
        ship_type: Some(ShipType::Military),
        is_used: Some(false),
        ..ShipCriteria::default()
    };

    let manual_result = manual.apply(create_fleet());
    let criteria_result = FilterPipeline::from_criteria(&criteria).apply(create_fleet());

    assert_eq!(ids(&manual_result), vec![2]);
    assert_eq!(manual_result, criteria_result);
}

#[test]
fn test_listing_pages_through_sorted_results() {
    let base = ShipQuery::new(
        ShipCriteria {
            name: Some("Eagle".to_string()),
            ..ShipCriteria::default()
        },
        Some(ShipOrder::Speed),
        PageRequest::new(0, 1),
    );

    let first = run_query(create_fleet(), &base);
    let second = run_query(
        create_fleet(),
        &ShipQuery {
            page: PageRequest::new(1, 1),
            ..base.clone()
        },
    );
    let third = run_query(
        create_fleet(),
        &ShipQuery {
            page: PageRequest::new(2, 1),
            ..base
        },
    );

    assert_eq!(ids(&first), vec![6]);
    assert_eq!(ids(&second), vec![3]);
    assert!(third.is_empty());
}

#[test]
fn test_every_result_satisfies_every_constraint() {
    let criteria = ShipCriteria {
        min_crew_size: Some(10),
        max_crew_size: Some(5000),
        min_rating: Some(1.5),
        ..ShipCriteria::default()
    };

    let all = create_fleet();
    let filtered = pipeline::filter_ships(all.clone(), &criteria);

    for ship in &filtered {
        assert!(ship.crew_size >= 10 && ship.crew_size <= 5000);
        assert!(ship.rating >= 1.5);
    }
    let rejected = all.iter().filter(|s| !filtered.contains(s)).count();
    assert_eq!(rejected + filtered.len(), all.len());
    assert_eq!(ids(&filtered), vec![2, 3, 4]);
}

#[test]
fn test_order_by_date_over_filtered_set() {
    let query = ShipQuery::new(
        ShipCriteria {
            is_used: Some(true),
            ..ShipCriteria::default()
        },
        Some(ShipOrder::Date),
        PageRequest::new(0, 10),
    );

    let page = run_query(create_fleet(), &query);

    assert_eq!(ids(&page), vec![1, 4, 6]);
}
