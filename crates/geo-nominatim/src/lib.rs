//! OpenStreetMap Nominatim geocoder
//!
//! HTTP-backed forward and reverse geocoding against the Nominatim API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod response;

pub use client::NominatimGeocoder;
pub use config::{NominatimConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
