//! Geocoder capability

use crate::{Location, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Forward and reverse location lookup
///
/// Implementations return `Error::NoResult` when the query is understood but
/// nothing matches. Any other error means the backend itself failed.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text address to a location
    async fn geocode(&self, address: &str) -> Result<Location>;

    /// Resolve a location to a human-readable address
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String>;

    /// Short backend name for log output
    fn name(&self) -> &str {
        "geocoder"
    }
}

#[async_trait]
impl<T: Geocoder + ?Sized> Geocoder for Arc<T> {
    async fn geocode(&self, address: &str) -> Result<Location> {
        (**self).geocode(address).await
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        (**self).reverse_geocode(lat, lng).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    async fn geocode(&self, address: &str) -> Result<Location> {
        (**self).geocode(address).await
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        (**self).reverse_geocode(lat, lng).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Fixed;

    #[async_trait]
    impl Geocoder for Fixed {
        async fn geocode(&self, address: &str) -> Result<Location> {
            match address {
                "here" => Ok(Location::new(1.0, 2.0)),
                _ => Err(Error::NoResult),
            }
        }

        async fn reverse_geocode(&self, _lat: f64, _lng: f64) -> Result<String> {
            Err(Error::NoResult)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_arc_handle_delegates() {
        let geocoder: Arc<dyn Geocoder> = Arc::new(Fixed);
        assert_eq!(geocoder.name(), "fixed");
        assert_eq!(
            geocoder.geocode("here").await.unwrap(),
            Location::new(1.0, 2.0)
        );
        assert!(geocoder.geocode("there").await.unwrap_err().is_no_result());
    }

    #[tokio::test]
    async fn test_box_handle_delegates() {
        let geocoder: Box<dyn Geocoder> = Box::new(Fixed);
        assert!(geocoder
            .reverse_geocode(1.0, 2.0)
            .await
            .unwrap_err()
            .is_no_result());
    }
}
