//! Chained geocoding
//!
//! Tries an ordered list of geocoders and returns the first hit.
//! A chain is itself a `Geocoder`, so chains nest.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chained;

pub use chained::ChainedGeocoder;
pub use geo_core::{Error, Geocoder, Location, Result};
