//! Page slicing for ship listings.

use serde::{Deserialize, Serialize};
use ship_data::Ship;
use std::ops::Range;

/// Zero-based page number and page size.
///
/// Both default to 0; a page size of 0 always yields an empty page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    #[serde(rename = "pageNumber")]
    pub number: usize,
    #[serde(rename = "pageSize")]
    pub size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Index range of this page within a collection of `len` items.
    ///
    /// Clamped to `len`; a page that starts past the end is an empty range.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.number.saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        start..end
    }
}

/// Slice one page out of `ships`
pub fn paginate(mut ships: Vec<Ship>, page: PageRequest) -> Vec<Ship> {
    let range = page.range(ships.len());
    ships.truncate(range.end);
    ships.drain(..range.start);
    ships
}
