//! Error types

/// Geocoding errors
///
/// `NoResult` is the only variant a chain treats as "try the next backend".
/// Everything else is an operational failure and is surfaced as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backend understood the request but has no matching entry
    #[error("No result")]
    NoResult,

    /// Backend-internal failure (unexpected payload, bad response)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Coordinate outside the valid geographic range
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the "no match found" sentinel
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult)
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
