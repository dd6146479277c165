//! Response parsing
//!
//! Kept separate from the HTTP client so it can be tested without a server.

use geo_core::{Error, Location, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

#[derive(Deserialize)]
struct ReverseResult {
    display_name: Option<String>,
    error: Option<String>,
}

/// Parse a `/search?format=jsonv2` body; first hit wins
pub fn parse_search_response(body: &str) -> Result<Location> {
    let results: Vec<SearchResult> = serde_json::from_str(body)
        .map_err(|e| Error::Backend(format!("Failed to parse search response: {}", e)))?;

    let first = results.into_iter().next().ok_or(Error::NoResult)?;
    let lat = first
        .lat
        .parse::<f64>()
        .map_err(|e| Error::Backend(format!("Invalid lat {:?}: {}", first.lat, e)))?;
    let lng = first
        .lon
        .parse::<f64>()
        .map_err(|e| Error::Backend(format!("Invalid lon {:?}: {}", first.lon, e)))?;

    if !lat.is_finite() || !lng.is_finite() {
        return Err(Error::Backend(format!(
            "Non-finite coordinate ({}, {})",
            first.lat, first.lon
        )));
    }

    Ok(Location::new(lat, lng))
}

/// Parse a `/reverse?format=jsonv2` body
///
/// Nominatim answers a miss with HTTP 200 and `{"error": "Unable to geocode"}`.
pub fn parse_reverse_response(body: &str) -> Result<String> {
    let result: ReverseResult = serde_json::from_str(body)
        .map_err(|e| Error::Backend(format!("Failed to parse reverse response: {}", e)))?;

    if result.error.is_some() {
        return Err(Error::NoResult);
    }

    match result.display_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Error::NoResult),
    }
}
