//! Benchmarks for ship listings
//!
//! Run with: cargo bench --package pipeline
//!
//! Builds a synthetic fleet and measures filtering and a full listing.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{filter_ships, run_query, PageRequest, ShipCriteria, ShipOrder, ShipQuery};
use ship_data::{RatingPolicy, Ship, ShipType};

fn build_fleet(size: u64) -> Vec<Ship> {
    let policy = RatingPolicy::default();
    (1..=size)
        .map(|id| {
            let mut ship = Ship {
                id: Some(id),
                name: format!("Ship {}", id),
                planet: ["Earth", "Mars", "Jupiter"][(id % 3) as usize].to_string(),
                ship_type: ShipType::ALL[(id % 3) as usize],
                prod_date: Utc
                    .with_ymd_and_hms(2801 + (id % 218) as i32, 1, 1, 0, 0, 0)
                    .unwrap(),
                is_used: id % 2 == 0,
                speed: 0.01 + (id % 98) as f64 / 100.0,
                crew_size: (id % 9999) as i32 + 1,
                rating: 0.0,
            };
            ship.rating = policy.rate(&ship).unwrap();
            ship
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let fleet = build_fleet(20_000);
    let criteria = ShipCriteria {
        planet: Some("Mars".to_string()),
        min_speed: Some(0.2),
        max_speed: Some(0.8),
        is_used: Some(false),
        ..ShipCriteria::default()
    };

    c.bench_function("filter_ships_20k", |b| {
        b.iter(|| {
            let filtered = filter_ships(black_box(fleet.clone()), black_box(&criteria));
            black_box(filtered)
        })
    });
}

fn bench_full_query(c: &mut Criterion) {
    let fleet = build_fleet(20_000);
    let query = ShipQuery::new(
        ShipCriteria {
            min_rating: Some(0.5),
            ..ShipCriteria::default()
        },
        Some(ShipOrder::Rating),
        PageRequest::new(3, 25),
    );

    c.bench_function("run_query_20k", |b| {
        b.iter(|| {
            let page = run_query(black_box(fleet.clone()), black_box(&query));
            black_box(page)
        })
    });
}

criterion_group!(benches, bench_filter, bench_full_query);
criterion_main!(benches);
