//! # Ship Data Crate
//!
//! This crate holds everything the registry knows about a single ship.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Ship, ShipType, ShipDraft, ShipUpdate)
//! - **validation**: Field rules (name/planet length, speed, crew size, production year)
//! - **rating**: The rating formula, anchored to a configurable current year
//! - **merge**: Validate-then-apply merging of partial updates
//! - **parser**: Read and write the `ships.dat` store
//! - **repository**: Storage trait with in-memory and file-backed implementations
//! - **error**: Error types for the crate
//!
//! ## Example Usage
//!
//! ```ignore
//! use ship_data::{FileShipRepository, RatingPolicy, ShipRepository};
//!
//! let policy = RatingPolicy::default();
//! let repo = FileShipRepository::open("data/ships.dat", &policy)?;
//!
//! for ship in repo.find_all()? {
//!     println!("{} from {} rated {}", ship.name, ship.planet, ship.rating);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod validation;
pub mod rating;
pub mod merge;
pub mod parser;
pub mod repository;

// Re-export commonly used types for convenience
pub use error::{Result, ShipError};
pub use merge::apply_update;
pub use rating::{DEFAULT_CURRENT_YEAR, RatingPolicy};
pub use repository::{FileShipRepository, InMemoryShipRepository, ShipRepository};
pub use types::{
    // Type aliases
    ShipId,
    // Core types
    Ship,
    ShipDraft,
    ShipUpdate,
    // Enums
    ShipField,
    ShipType,
    // Helpers
    parse_ship_id,
};
pub use validation::{is_entity_valid, validate_draft, validate_update};
