//! Pipeline for querying ship collections.
//!
//! This crate provides:
//! - Filter trait and implementations for ship filtering
//! - FilterPipeline for composing filters from `ShipCriteria`
//! - Sorting by a closed set of order keys
//! - Page slicing
//!
//! ## Architecture
//! A listing runs in stages over an already-loaded collection:
//! 1. Filters drop ships that miss any present constraint
//! 2. The remaining ships are stable-sorted by the requested key
//! 3. One page is sliced out of the sorted result
//!
//! Every stage is pure; none of them touch storage.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PageRequest, ShipCriteria, ShipOrder, ShipQuery, run_query};
//!
//! let query = ShipQuery::new(
//!     ShipCriteria { is_used: Some(false), ..ShipCriteria::default() },
//!     Some(ShipOrder::Rating),
//!     PageRequest::new(0, 10),
//! );
//! let page = run_query(repo.find_all()?, &query);
//! ```

pub mod traits;
pub mod filters;
pub mod criteria;
pub mod filter_pipeline;
pub mod sort;
pub mod page;
pub mod query;

// Re-export main types
pub use criteria::ShipCriteria;
pub use filter_pipeline::{FilterPipeline, filter_ships};
pub use page::{PageRequest, paginate};
pub use query::{ShipQuery, run_query};
pub use sort::{ShipOrder, sort_ships};
pub use traits::Filter;
