//! Lookup tables

use geo_core::Location;
use std::collections::HashMap;

/// Forward table: exact address -> location
pub type AddressToLocation = HashMap<String, Location>;

/// Coordinate key compared by exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LocationKey {
    lat: u64,
    lng: u64,
}

impl LocationKey {
    fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: normalize(lat).to_bits(),
            lng: normalize(lng).to_bits(),
        }
    }
}

/// Fold -0.0 into 0.0 so both spellings hit the same entry
fn normalize(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Reverse table: exact location -> address
#[derive(Debug, Clone, Default)]
pub struct LocationToAddress {
    entries: HashMap<LocationKey, String>,
}

impl LocationToAddress {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the address for a location
    pub fn insert(&mut self, location: Location, address: impl Into<String>) -> Option<String> {
        self.entries
            .insert(LocationKey::new(location.lat, location.lng), address.into())
    }

    /// Address stored for the exact coordinate
    pub fn get(&self, lat: f64, lng: f64) -> Option<&str> {
        self.entries
            .get(&LocationKey::new(lat, lng))
            .map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Location, String)> for LocationToAddress {
    fn from_iter<I: IntoIterator<Item = (Location, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (location, address) in iter {
            table.insert(location, address);
        }
        table
    }
}
