//! Table geocoder

use crate::{AddressToLocation, Dataset, LocationToAddress};
use async_trait::async_trait;
use geo_core::{Error, Geocoder, Location, Result};
use std::path::Path;
use tracing::debug;

/// Geocoder backed by static lookup tables
///
/// Matching is exact: addresses by string equality, coordinates by value.
#[derive(Debug, Clone, Default)]
pub struct DataGeocoder {
    address_to_location: AddressToLocation,
    location_to_address: LocationToAddress,
}

impl DataGeocoder {
    /// Create from forward and reverse tables
    pub fn new(
        address_to_location: AddressToLocation,
        location_to_address: LocationToAddress,
    ) -> Self {
        Self {
            address_to_location,
            location_to_address,
        }
    }

    /// Create from a parsed dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        let (forward, reverse) = dataset.into_tables();
        Self::new(forward, reverse)
    }

    /// Parse a JSON dataset
    pub fn from_json_str(json: &str) -> Result<Self> {
        Dataset::from_json_str(json).map(Self::from_dataset)
    }

    /// Load a JSON dataset file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let geocoder = Self::from_dataset(Dataset::load(path)?);
        debug!(
            "Loaded {} forward and {} reverse entries from {}",
            geocoder.address_to_location.len(),
            geocoder.location_to_address.len(),
            path.display()
        );
        Ok(geocoder)
    }
}

#[async_trait]
impl Geocoder for DataGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location> {
        self.address_to_location
            .get(address)
            .copied()
            .ok_or(Error::NoResult)
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        self.location_to_address
            .get(lat, lng)
            .map(str::to_string)
            .ok_or(Error::NoResult)
    }

    fn name(&self) -> &str {
        "data"
    }
}
