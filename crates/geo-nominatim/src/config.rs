//! Nominatim configuration

use serde::{Deserialize, Serialize};

/// Public OpenStreetMap instance
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
/// Nominatim's usage policy requires an identifying user agent
pub const DEFAULT_USER_AGENT: &str = concat!("geo-chained/", env!("CARGO_PKG_VERSION"));
/// Request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Nominatim client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
    /// API base URL, without trailing path
    pub base_url: String,
    /// User-Agent header
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Preferred result language (`accept-language`)
    pub language: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: None,
        }
    }
}

impl NominatimConfig {
    /// Default config pointed at another instance
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
