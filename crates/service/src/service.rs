//! # Ship Service
//!
//! This module coordinates every registry operation:
//! 1. Validate the client payload
//! 2. Compute the rating with the configured `RatingPolicy`
//! 3. Read from or write to the `ShipRepository`
//! 4. For listings, run the filter, sort and page stages
//!
//! Errors are `ShipError` values. `ShipError::is_client_error` separates
//! bad requests and missing ships from storage failures.

use std::time::Instant;

use tracing::{debug, info, warn};

use pipeline::{ShipCriteria, ShipQuery, filter_ships, run_query};
use ship_data::{
    RatingPolicy, Result, Ship, ShipDraft, ShipError, ShipField, ShipId, ShipRepository,
    ShipUpdate, apply_update, validate_draft,
};

/// Tunables for a `ShipService`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServiceConfig {
    /// Rating formula, anchored to the registry's current year
    pub rating: RatingPolicy,
}

impl ServiceConfig {
    /// Configuration with ratings anchored to `current_year`
    pub fn with_current_year(current_year: i32) -> Self {
        Self {
            rating: RatingPolicy::new(current_year),
        }
    }
}

/// Registry operations over a ship store.
pub struct ShipService<R: ShipRepository> {
    repo: R,
    config: ServiceConfig,
}

impl<R: ShipRepository> ShipService<R> {
    pub fn new(repo: R, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Ships matching `query`, ordered and paged.
    ///
    /// An empty page is not an error.
    pub fn get_ships(&self, query: &ShipQuery) -> Result<Vec<Ship>> {
        let start_time = Instant::now();

        let ships = self.repo.find_all()?;
        let total = ships.len();
        let page = run_query(ships, query);

        debug!(
            "Listed {} of {} ships (order: {:?}, page {} of size {}) in {:.2?}",
            page.len(),
            total,
            query.order,
            query.page.number,
            query.page.size,
            start_time.elapsed()
        );
        Ok(page)
    }

    /// Number of ships matching `criteria`, ignoring order and paging
    pub fn count_ships(&self, criteria: &ShipCriteria) -> Result<usize> {
        let ships = self.repo.find_all()?;
        Ok(filter_ships(ships, criteria).len())
    }

    /// Validate `draft`, rate it and store it as a new ship.
    ///
    /// `is_used` defaults to `false`. Nothing is stored when validation or
    /// rating fails.
    pub fn create_ship(&mut self, draft: ShipDraft) -> Result<Ship> {
        if let Err(err) = validate_draft(&draft) {
            warn!("Rejected new ship: {}", err);
            return Err(err);
        }

        let ship = build_ship(draft, &self.config.rating)?;
        let saved = self.repo.save(ship)?;

        info!(
            "Created ship {:?} '{}' with rating {}",
            saved.id, saved.name, saved.rating
        );
        Ok(saved)
    }

    /// The ship stored under `id`
    pub fn get_ship(&self, id: ShipId) -> Result<Ship> {
        self.repo
            .find_by_id(id)?
            .ok_or(ShipError::NotFound { id })
    }

    /// Merge `update` into the ship stored under `id`.
    ///
    /// The update is all-or-nothing: when any present field is invalid the
    /// stored ship is left exactly as it was.
    pub fn update_ship(&mut self, id: ShipId, update: &ShipUpdate) -> Result<Ship> {
        let mut ship = self.get_ship(id)?;

        let rerated = match apply_update(&mut ship, update, &self.config.rating) {
            Ok(rerated) => rerated,
            Err(err) => {
                warn!("Rejected update of ship {}: {}", id, err);
                return Err(err);
            }
        };

        let saved = self.repo.save(ship)?;
        if rerated {
            info!("Updated ship {}, new rating {}", id, saved.rating);
        } else {
            info!("Updated ship {}", id);
        }
        Ok(saved)
    }

    /// Remove the ship stored under `id`
    pub fn delete_ship(&mut self, id: ShipId) -> Result<()> {
        self.repo.delete(id)?;
        info!("Deleted ship {}", id);
        Ok(())
    }
}

/// Turn a validated draft into an unsaved ship
fn build_ship(draft: ShipDraft, policy: &RatingPolicy) -> Result<Ship> {
    let missing = |field| ShipError::InvalidField {
        field,
        reason: "is required".to_string(),
    };

    let mut ship = Ship {
        id: None,
        name: draft.name.ok_or_else(|| missing(ShipField::Name))?,
        planet: draft.planet.ok_or_else(|| missing(ShipField::Planet))?,
        ship_type: draft.ship_type.ok_or_else(|| missing(ShipField::ShipType))?,
        prod_date: draft.prod_date.ok_or_else(|| missing(ShipField::ProdDate))?,
        is_used: draft.is_used.unwrap_or(false),
        speed: draft.speed.ok_or_else(|| missing(ShipField::Speed))?,
        crew_size: draft.crew_size.ok_or_else(|| missing(ShipField::CrewSize))?,
        rating: 0.0,
    };
    ship.rating = policy.rate(&ship)?;
    Ok(ship)
}
