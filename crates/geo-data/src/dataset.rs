//! JSON dataset format
//!
//! ```json
//! {
//!   "forward": { "Melbourne VIC": { "lat": -37.814107, "lng": 144.96328 } },
//!   "reverse": [ { "lat": -37.816742, "lng": 144.964463, "address": "Melbourne VIC 3000, Australia" } ]
//! }
//! ```
//!
//! Both sections are optional.

use crate::{AddressToLocation, LocationToAddress};
use geo_core::{Error, Location, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized forward and reverse tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Address -> location entries
    #[serde(default)]
    pub forward: AddressToLocation,
    /// Location -> address entries
    #[serde(default)]
    pub reverse: Vec<ReverseEntry>,
}

/// One reverse table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseEntry {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Address for this exact coordinate
    pub address: String,
}

impl Dataset {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("Invalid dataset: {}", e)))
    }

    /// Read and parse a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| {
            Error::Config(format!("Invalid dataset {}: {}", path.display(), e))
        })
    }

    /// Split into lookup tables
    pub fn into_tables(self) -> (AddressToLocation, LocationToAddress) {
        let reverse = self
            .reverse
            .into_iter()
            .map(|entry| (Location::new(entry.lat, entry.lng), entry.address))
            .collect();
        (self.forward, reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MELBOURNE: &str = r#"{
        "forward": { "Melbourne VIC": { "lat": -37.814107, "lng": 144.96328 } },
        "reverse": [
            { "lat": -37.816742, "lng": 144.964463, "address": "Melbourne VIC 3000, Australia" }
        ]
    }"#;

    #[test]
    fn test_parse_dataset() {
        let (forward, reverse) = Dataset::from_json_str(MELBOURNE).unwrap().into_tables();
        assert_eq!(
            forward.get("Melbourne VIC"),
            Some(&Location::new(-37.814107, 144.96328))
        );
        assert_eq!(
            reverse.get(-37.816742, 144.964463),
            Some("Melbourne VIC 3000, Australia")
        );
    }

    #[test]
    fn test_sections_are_optional() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        assert!(dataset.forward.is_empty());
        assert!(dataset.reverse.is_empty());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Dataset::from_json_str(r#"{"forward": []}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MELBOURNE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.forward.len(), 1);
        assert_eq!(dataset.reverse.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
