//! Substring filters on name and planet.

use crate::traits::Filter;
use ship_data::Ship;

/// Which free-text field a `SubstringFilter` looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Planet,
}

/// Keeps ships whose name (or planet) contains a fragment.
///
/// Matching is case-sensitive, the way `str::contains` is.
pub struct SubstringFilter {
    field: TextField,
    fragment: String,
}

impl SubstringFilter {
    pub fn on_name(fragment: impl Into<String>) -> Self {
        Self {
            field: TextField::Name,
            fragment: fragment.into(),
        }
    }

    pub fn on_planet(fragment: impl Into<String>) -> Self {
        Self {
            field: TextField::Planet,
            fragment: fragment.into(),
        }
    }
}

impl Filter for SubstringFilter {
    fn name(&self) -> &str {
        match self.field {
            TextField::Name => "NameFilter",
            TextField::Planet => "PlanetFilter",
        }
    }

    fn keep(&self, ship: &Ship) -> bool {
        let haystack = match self.field {
            TextField::Name => &ship.name,
            TextField::Planet => &ship.planet,
        };
        haystack.contains(self.fragment.as_str())
    }
}
