//! Geocoding primitives
//!
//! Shared location type, error taxonomy and the `Geocoder` capability that
//! every backend (static table, HTTP service, chain) implements.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod geocoder;
pub mod location;

pub use error::{Error, Result};
pub use geocoder::Geocoder;
pub use location::Location;
