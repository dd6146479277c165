//! Nominatim HTTP client

use crate::response::{parse_reverse_response, parse_search_response};
use crate::NominatimConfig;
use async_trait::async_trait;
use geo_core::{Error, Geocoder, Location, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Geocoder backed by a Nominatim instance
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Create client from config
    pub fn new(config: NominatimConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::Config("Nominatim base_url is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("HTTP client error: {}", e)))?;

        info!("Creating Nominatim geocoder: {}", config.base_url);

        Ok(Self { config, client })
    }

    /// Current configuration
    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a GET and return the body of a successful response
    async fn get(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let request = match &self.config.language {
            Some(language) => request.query(&[("accept-language", language.as_str())]),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Nominatim returned status {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read Nominatim response: {}", e)))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location> {
        debug!("Nominatim search: {:?}", address);

        let request = self
            .client
            .get(self.endpoint("search"))
            .query(&[("format", "jsonv2"), ("limit", "1"), ("q", address)]);

        let body = self.get(request).await?;
        parse_search_response(&body)
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        debug!("Nominatim reverse: ({}, {})", lat, lng);

        let request = self
            .client
            .get(self.endpoint("reverse"))
            .query(&[("format", "jsonv2")])
            .query(&[("lat", lat), ("lon", lng)]);

        let body = self.get(request).await?;
        parse_reverse_response(&body)
    }

    fn name(&self) -> &str {
        "nominatim"
    }
}
