//! Fallback chain over several geocoders

use async_trait::async_trait;
use geo_core::{Error, Geocoder, Location, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Geocoder that delegates to an ordered list of geocoders
///
/// Backends are tried one at a time in construction order. The first
/// success wins; `Error::NoResult` moves on to the next backend; any other
/// error is returned immediately without consulting the rest. When every
/// backend misses (or the list is empty) the chain reports
/// `Error::NoResult` itself, so an enclosing chain keeps falling back.
pub struct ChainedGeocoder {
    geocoders: Vec<Arc<dyn Geocoder>>,
}

impl ChainedGeocoder {
    /// Create chain; order is priority
    pub fn new(geocoders: Vec<Arc<dyn Geocoder>>) -> Self {
        if geocoders.is_empty() {
            debug!("Creating empty geocoder chain: every lookup will report no result");
        }
        Self { geocoders }
    }

    /// Number of backends
    pub fn len(&self) -> usize {
        self.geocoders.len()
    }

    /// True when the chain has no backends
    pub fn is_empty(&self) -> bool {
        self.geocoders.is_empty()
    }
}

impl FromIterator<Arc<dyn Geocoder>> for ChainedGeocoder {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Geocoder>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for ChainedGeocoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.geocoders.iter().map(|g| g.name()))
            .finish()
    }
}

#[async_trait]
impl Geocoder for ChainedGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location> {
        for (index, geocoder) in self.geocoders.iter().enumerate() {
            match geocoder.geocode(address).await {
                Ok(location) => {
                    debug!(
                        "Geocoded {:?} to ({}) via #{} {}",
                        address,
                        location,
                        index,
                        geocoder.name()
                    );
                    return Ok(location);
                }
                Err(Error::NoResult) => {
                    trace!("No result for {:?} from #{} {}", address, index, geocoder.name());
                }
                Err(e) => {
                    warn!(
                        "Geocoding {:?} failed in #{} {}: {}",
                        address,
                        index,
                        geocoder.name(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        Err(Error::NoResult)
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        for (index, geocoder) in self.geocoders.iter().enumerate() {
            match geocoder.reverse_geocode(lat, lng).await {
                Ok(address) => {
                    debug!(
                        "Reverse geocoded ({}, {}) via #{} {}",
                        lat,
                        lng,
                        index,
                        geocoder.name()
                    );
                    return Ok(address);
                }
                Err(Error::NoResult) => {
                    trace!(
                        "No result for ({}, {}) from #{} {}",
                        lat,
                        lng,
                        index,
                        geocoder.name()
                    );
                }
                Err(e) => {
                    warn!(
                        "Reverse geocoding ({}, {}) failed in #{} {}: {}",
                        lat,
                        lng,
                        index,
                        geocoder.name(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        Err(Error::NoResult)
    }

    fn name(&self) -> &str {
        "chained"
    }
}
