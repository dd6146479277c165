//! Chain configuration
//!
//! ```json
//! {
//!   "backends": [
//!     { "type": "data", "path": "places.json" },
//!     { "type": "chain", "backends": [
//!       { "type": "nominatim", "base_url": "http://localhost:8080" },
//!       { "type": "nominatim" }
//!     ] }
//!   ]
//! }
//! ```

use anyhow::Context;
use directories::ProjectDirs;
use geo_chained::ChainedGeocoder;
use geo_core::{Geocoder, Result};
use geo_data::DataGeocoder;
use geo_nominatim::{NominatimConfig, NominatimGeocoder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Ordered list of backends, highest priority first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Backends in fallback order
    #[serde(default)]
    pub backends: Vec<BackendConfig>,
}

/// One backend entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    /// JSON dataset file; relative paths resolve against the config file
    Data {
        /// Dataset path
        path: PathBuf,
    },
    /// Nominatim HTTP service
    Nominatim(NominatimConfig),
    /// Nested chain
    Chain {
        /// Backends of the nested chain
        #[serde(default)]
        backends: Vec<BackendConfig>,
    },
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            backends: vec![BackendConfig::Nominatim(NominatimConfig::default())],
        }
    }
}

impl ChainConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Load the explicit config, else the user config, else defaults
    ///
    /// Returns the config and the directory relative paths resolve against.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<(Self, PathBuf)> {
        if let Some(path) = explicit {
            info!("Using config {}", path.display());
            return Ok((Self::load(path)?, parent_dir(path)));
        }

        if let Some(path) = default_config_path().filter(|p| p.is_file()) {
            info!("Using config {}", path.display());
            return Ok((Self::load(&path)?, parent_dir(&path)));
        }

        info!("No config found, using default Nominatim backend");
        Ok((Self::default(), PathBuf::from(".")))
    }

    /// Build the top-level chain
    pub fn build(&self, base_dir: &Path) -> Result<ChainedGeocoder> {
        if self.backends.is_empty() {
            warn!("Config has no backends: every lookup will report no result");
        }
        build_chain(&self.backends, base_dir)
    }
}

fn build_chain(backends: &[BackendConfig], base_dir: &Path) -> Result<ChainedGeocoder> {
    backends
        .iter()
        .map(|backend| backend.build(base_dir))
        .collect::<Result<Vec<_>>>()
        .map(ChainedGeocoder::new)
}

impl BackendConfig {
    /// Instantiate this backend
    pub fn build(&self, base_dir: &Path) -> Result<Arc<dyn Geocoder>> {
        let geocoder: Arc<dyn Geocoder> = match self {
            Self::Data { path } => Arc::new(DataGeocoder::from_file(base_dir.join(path))?),
            Self::Nominatim(config) => Arc::new(NominatimGeocoder::new(config.clone())?),
            Self::Chain { backends } => Arc::new(build_chain(backends, base_dir)?),
        };
        Ok(geocoder)
    }
}

/// `<platform config dir>/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "GeoChained", "geo-chained")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_core::{Error, Location};

    const PLACES: &str = r#"{
        "forward": { "Melbourne VIC": { "lat": -37.814107, "lng": 144.96328 } }
    }"#;

    const ADDRESSES: &str = r#"{
        "reverse": [
            { "lat": -37.816742, "lng": 144.964463, "address": "Melbourne VIC 3000, Australia" }
        ]
    }"#;

    fn write_config(dir: &Path, config: &str) -> PathBuf {
        std::fs::write(dir.join("places.json"), PLACES).unwrap();
        std::fs::write(dir.join("addresses.json"), ADDRESSES).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, config).unwrap();
        path
    }

    #[test]
    fn test_default_is_single_nominatim() {
        let config = ChainConfig::default();
        assert_eq!(config.backends.len(), 1);
        assert!(matches!(config.backends[0], BackendConfig::Nominatim(_)));
    }

    #[test]
    fn test_parse_nested_config() {
        let config: ChainConfig = serde_json::from_str(
            r#"{"backends": [
                {"type": "data", "path": "places.json"},
                {"type": "chain", "backends": [
                    {"type": "nominatim", "base_url": "http://localhost:8080", "timeout_secs": 3}
                ]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(config.backends.len(), 2);
        match &config.backends[1] {
            BackendConfig::Chain { backends } => match &backends[0] {
                BackendConfig::Nominatim(nominatim) => {
                    assert_eq!(nominatim.base_url, "http://localhost:8080");
                    assert_eq!(nominatim.timeout_secs, 3);
                }
                other => panic!("unexpected backend: {:?}", other),
            },
            other => panic!("unexpected backend: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_backend_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"backends": [{"type": "carrier-pigeon"}]}"#);
        assert!(ChainConfig::load(&path).is_err());
    }

    #[tokio::test]
    async fn test_build_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"{"backends": [
                {"type": "data", "path": "places.json"},
                {"type": "chain", "backends": [{"type": "data", "path": "addresses.json"}]}
            ]}"#,
        );

        let (config, base_dir) = ChainConfig::resolve(Some(&path)).unwrap();
        let chain = config.build(&base_dir).unwrap();
        assert_eq!(chain.len(), 2);

        assert_eq!(
            chain.geocode("Melbourne VIC").await.unwrap(),
            Location::new(-37.814107, 144.96328)
        );
        assert!(chain
            .reverse_geocode(-37.816742, 144.964463)
            .await
            .unwrap()
            .ends_with("Melbourne VIC 3000, Australia"));
        assert!(chain.geocode("NOWHERE,TX").await.unwrap_err().is_no_result());
    }

    #[tokio::test]
    async fn test_empty_backends_build_empty_chain() {
        let config: ChainConfig = serde_json::from_str(r#"{"backends": []}"#).unwrap();
        let chain = config.build(Path::new(".")).unwrap();
        assert!(chain.is_empty());
        assert!(chain.geocode("anything").await.unwrap_err().is_no_result());
    }

    #[test]
    fn test_missing_dataset_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChainConfig {
            backends: vec![BackendConfig::Data {
                path: PathBuf::from("missing.json"),
            }],
        };
        assert!(matches!(config.build(dir.path()), Err(Error::Io(_))));
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("config.json")), PathBuf::from("."));
        assert_eq!(
            parent_dir(Path::new("/etc/geo/config.json")),
            PathBuf::from("/etc/geo")
        );
    }
}
