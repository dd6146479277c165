//! Table-driven geocoder
//!
//! Answers from in-memory address and coordinate tables, optionally loaded
//! from a JSON dataset. Useful as a local first stage in a chain and as a
//! deterministic backend in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dataset;
pub mod geocoder;
pub mod table;

pub use dataset::{Dataset, ReverseEntry};
pub use geocoder::DataGeocoder;
pub use table::{AddressToLocation, LocationToAddress};
