//! Geographic coordinates

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude bound in degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Longitude bound in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl Location {
    /// Create a location without range checks
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a location, rejecting values outside the geographic range
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        let location = Self::new(lat, lng);
        if !location.is_valid() {
            return Err(Error::InvalidLocation(format!(
                "({}, {}) must be within [-{}, {}] x [-{}, {}]",
                lat, lng, MAX_LATITUDE, MAX_LATITUDE, MAX_LONGITUDE, MAX_LONGITUDE
            )));
        }
        Ok(location)
    }

    /// Check both components are finite and in range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lng.abs() <= MAX_LONGITUDE
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}
