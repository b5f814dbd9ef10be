//! Storage for ships.
//!
//! `ShipRepository` is the seam between the registry logic and wherever ships
//! actually live. Two implementations are provided:
//! - `InMemoryShipRepository`, a `BTreeMap` keyed by id (tests, scratch use)
//! - `FileShipRepository`, the same map mirrored to a `ships.dat` file
//!
//! Neither does any locking. Mutations take `&mut self`, so a single owner
//! serializes every write.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, ShipError};
use crate::parser;
use crate::rating::RatingPolicy;
use crate::types::{Ship, ShipDraft, ShipId};
use crate::validation::validate_draft;

/// A store of ships.
pub trait ShipRepository {
    /// Every stored ship, ordered by id
    fn find_all(&self) -> Result<Vec<Ship>>;

    /// The ship stored under `id`, if any
    fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>>;

    /// Store a ship and return it as stored.
    ///
    /// A ship without an id gets the next free one. A ship with an id
    /// replaces whatever was stored under it.
    fn save(&mut self, ship: Ship) -> Result<Ship>;

    /// Remove the ship stored under `id`
    fn delete(&mut self, id: ShipId) -> Result<()>;
}

// =============================================================================
// In-memory repository
// =============================================================================

/// Ships held in a map. Ids are handed out in increasing order and are never
/// reused, even after a delete.
#[derive(Debug, Clone)]
pub struct InMemoryShipRepository {
    ships: BTreeMap<ShipId, Ship>,
    next_id: ShipId,
}

impl Default for InMemoryShipRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryShipRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            ships: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a repository pre-populated with `ships`.
    ///
    /// Ships without an id are assigned one in iteration order.
    pub fn with_ships(ships: Vec<Ship>) -> Result<Self> {
        let mut repo = Self::new();
        for ship in ships {
            repo.store(ship)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Insert or replace `ship`. An id of `u64::MAX` leaves no successor for
    /// the next new ship, so it is rejected.
    fn store(&mut self, mut ship: Ship) -> Result<Ship> {
        let id = ship.id.unwrap_or(self.next_id);
        let successor = id
            .checked_add(1)
            .ok_or_else(|| ShipError::InvalidId(id.to_string()))?;
        ship.id = Some(id);
        self.next_id = self.next_id.max(successor);
        self.ships.insert(id, ship.clone());
        Ok(ship)
    }

    fn remove(&mut self, id: ShipId) -> Result<()> {
        self.ships
            .remove(&id)
            .map(|_| ())
            .ok_or(ShipError::NotFound { id })
    }
}

impl ShipRepository for InMemoryShipRepository {
    fn find_all(&self) -> Result<Vec<Ship>> {
        Ok(self.ships.values().cloned().collect())
    }

    fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>> {
        Ok(self.ships.get(&id).cloned())
    }

    fn save(&mut self, ship: Ship) -> Result<Ship> {
        self.store(ship)
    }

    fn delete(&mut self, id: ShipId) -> Result<()> {
        self.remove(id)
    }
}

// =============================================================================
// File-backed repository
// =============================================================================

/// Ships loaded from a `ships.dat` file and written back after every change.
///
/// A change is applied to a copy of the ships, the copy is written, and only
/// then does it replace the in-memory state. A failed write leaves both the
/// file and memory as they were.
#[derive(Debug)]
pub struct FileShipRepository {
    path: PathBuf,
    inner: InMemoryShipRepository,
}

impl FileShipRepository {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. Every loaded ship is validated and
    /// its rating recomputed with `policy`, so a hand-edited file cannot
    /// smuggle in an inconsistent rating.
    pub fn open(path: impl Into<PathBuf>, policy: &RatingPolicy) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            info!("No ship store at {}, starting empty", path.display());
            return Ok(Self {
                path,
                inner: InMemoryShipRepository::new(),
            });
        }

        let mut ships = parser::parse_ships(&path)?;
        prepare_loaded(&mut ships, policy)?;

        info!("Loaded {} ships from {}", ships.len(), path.display());
        Ok(Self {
            path,
            inner: InMemoryShipRepository::with_ships(ships)?,
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `next` to disk, then adopt it
    fn commit(&mut self, next: InMemoryShipRepository) -> Result<()> {
        let ships: Vec<Ship> = next.ships.values().cloned().collect();
        parser::write_ships(&self.path, &ships)?;
        debug!("Wrote {} ships to {}", ships.len(), self.path.display());
        self.inner = next;
        Ok(())
    }
}

impl ShipRepository for FileShipRepository {
    fn find_all(&self) -> Result<Vec<Ship>> {
        self.inner.find_all()
    }

    fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>> {
        self.inner.find_by_id(id)
    }

    fn save(&mut self, ship: Ship) -> Result<Ship> {
        let mut next = self.inner.clone();
        let saved = next.save(ship)?;
        self.commit(next)?;
        Ok(saved)
    }

    fn delete(&mut self, id: ShipId) -> Result<()> {
        let mut next = self.inner.clone();
        next.delete(id)?;
        self.commit(next)
    }
}

/// Validate and re-rate freshly parsed ships in parallel
fn prepare_loaded(ships: &mut [Ship], policy: &RatingPolicy) -> Result<()> {
    ships.par_iter_mut().try_for_each(|ship| {
        validate_draft(&ShipDraft::from(&*ship))?;
        ship.rating = policy.rate(ship)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShipType;
    use chrono::{TimeZone, Utc};

    fn ship(id: Option<ShipId>, name: &str) -> Ship {
        Ship {
            id,
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date: Utc.with_ymd_and_hms(3018, 1, 1, 0, 0, 0).unwrap(),
            is_used: false,
            speed: 0.5,
            crew_size: 10,
            rating: 20.0,
        }
    }

    #[test]
    fn test_save_assigns_ids() {
        let mut repo = InMemoryShipRepository::new();

        let first = repo.save(ship(None, "First")).unwrap();
        let second = repo.save(ship(None, "Second")).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_save_existing_replaces() {
        let mut repo = InMemoryShipRepository::new();
        let mut stored = repo.save(ship(None, "Before")).unwrap();

        stored.name = "After".to_string();
        repo.save(stored).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(1).unwrap().unwrap().name, "After");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut repo = InMemoryShipRepository::with_ships(vec![ship(Some(5), "Five")]).unwrap();

        repo.delete(5).unwrap();
        let next = repo.save(ship(None, "Next")).unwrap();

        assert_eq!(next.id, Some(6));
        assert!(repo.find_by_id(5).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut repo = InMemoryShipRepository::new();
        assert!(matches!(
            repo.delete(42),
            Err(ShipError::NotFound { id: 42 })
        ));
    }

    #[test]
    fn test_file_repository_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.dat");
        let policy = RatingPolicy::default();

        {
            let mut repo = FileShipRepository::open(&path, &policy).unwrap();
            repo.save(ship(None, "Persisted")).unwrap();
            repo.save(ship(None, "Deleted")).unwrap();
            repo.delete(2).unwrap();
        }

        let reopened = FileShipRepository::open(&path, &policy).unwrap();
        let ships = reopened.find_all().unwrap();
        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].name, "Persisted");
        assert_eq!(ships[0].id, Some(1));
    }

    #[test]
    fn test_save_rejects_id_without_successor() {
        let mut repo = InMemoryShipRepository::new();

        let err = repo.save(ship(Some(u64::MAX), "Last")).unwrap_err();

        assert!(matches!(err, ShipError::InvalidId(_)));
        assert!(repo.is_empty());
        assert!(InMemoryShipRepository::with_ships(vec![ship(Some(u64::MAX), "Last")]).is_err());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.dat");
        let mut repo = FileShipRepository::open(&path, &RatingPolicy::default()).unwrap();
        repo.save(ship(None, "Kept")).unwrap();

        // A directory in place of the file makes every write fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(repo.save(ship(None, "Lost")).is_err());
        assert!(repo.delete(1).is_err());

        let ships = repo.find_all().unwrap();
        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].name, "Kept");
        assert_eq!(repo.path(), path.as_path());
    }

    #[test]
    fn test_file_repository_recomputes_stale_ratings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.dat");
        let mut stale = ship(Some(1), "Stale");
        stale.rating = 99.0;
        parser::write_ships(&path, &[stale]).unwrap();

        let repo = FileShipRepository::open(&path, &RatingPolicy::default()).unwrap();

        assert_eq!(repo.find_by_id(1).unwrap().unwrap().rating, 20.0);
    }

    #[test]
    fn test_file_repository_rejects_invalid_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.dat");
        let mut broken = ship(Some(1), "Broken");
        broken.crew_size = 0;
        parser::write_ships(&path, &[broken]).unwrap();

        let err = FileShipRepository::open(&path, &RatingPolicy::default()).unwrap_err();

        assert!(err.is_client_error());
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo =
            FileShipRepository::open(dir.path().join("absent.dat"), &RatingPolicy::default())
                .unwrap();
        assert!(repo.find_all().unwrap().is_empty());
    }
}
