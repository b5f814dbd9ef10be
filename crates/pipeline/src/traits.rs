//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to ship collections.

use rayon::prelude::*;
use ship_data::Ship;

/// Collections at least this large are filtered on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

/// A single predicate over ships.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a filter run on the rayon pool
/// - `apply` takes ownership of the Vec<Ship> and returns the kept ships in
///   their original relative order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `ship` passes this filter
    fn keep(&self, ship: &Ship) -> bool;

    /// Keep the ships that pass, preserving order.
    fn apply(&self, ships: Vec<Ship>) -> Vec<Ship> {
        if ships.len() >= PARALLEL_THRESHOLD {
            ships.into_par_iter().filter(|ship| self.keep(ship)).collect()
        } else {
            ships.into_iter().filter(|ship| self.keep(ship)).collect()
        }
    }
}
