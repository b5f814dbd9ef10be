//! Service crate for the starfleet ship registry.
//!
//! This crate contains the `ShipService` that coordinates validation,
//! rating, querying and storage for every registry operation.

pub mod service;

pub use service::{ServiceConfig, ShipService};
