//! Error types for the ship-data crate.
//!
//! Every failure in this crate is a deterministic function of its input, so
//! none of these are retried. Callers map them to their own surface:
//! `InvalidField` and `InvalidId` are client errors, `NotFound` is a missing
//! entity, and `RatingDomain` means validation was bypassed somewhere upstream.

use thiserror::Error;

use crate::types::{ShipField, ShipId};

/// Errors produced while validating, rating, storing or loading ships
#[derive(Error, Debug)]
pub enum ShipError {
    /// A client-supplied field failed its validation rule
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: ShipField, reason: String },

    /// No ship is stored under this id
    #[error("Ship with id {id} not found")]
    NotFound { id: ShipId },

    /// The id could not be parsed as a positive integer
    #[error("Invalid ship id: {0}")]
    InvalidId(String),

    /// The rating denominator `current_year - production_year + 1` is zero
    #[error("Cannot rate a ship produced in {production_year} against current year {current_year}")]
    RatingDomain {
        production_year: i32,
        current_year: i32,
    },

    /// I/O error while reading or writing the ship store
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

impl ShipError {
    /// The offending field, for `InvalidField` errors
    pub fn field(&self) -> Option<ShipField> {
        match self {
            ShipError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Whether the error was caused by bad client input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ShipError::InvalidField { .. } | ShipError::InvalidId(_)
        )
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ShipError>;
