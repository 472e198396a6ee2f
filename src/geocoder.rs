//! Geocoding adapter backed by the Nominatim search API
//!
//! Resolves a free-text place name to coordinates. The first candidate of
//! the upstream response is authoritative; everything else is discarded.

use anyhow::{Context, Result, anyhow};
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, instrument};

use crate::config::GeocoderConfig;
use crate::http;
use crate::models::{Coordinates, Lookup};

pub struct GeocoderClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl GeocoderClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, config.max_retries)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to coordinates.
    ///
    /// `Missing` when the upstream has no candidates for the name; `Failed`
    /// when the call itself does not produce a usable answer.
    #[instrument(skip(self))]
    pub async fn resolve(&self, place_name: &str) -> Lookup<Coordinates> {
        Lookup::from_result(self.search(place_name).await)
    }

    async fn search(&self, place_name: &str) -> Result<Option<Coordinates>> {
        let url = format!(
            "{}/search?q={}&format=json",
            self.base_url,
            urlencoding::encode(place_name)
        );
        debug!("Geocoder request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "geocoding request failed with status {}",
                response.status()
            ));
        }

        let candidates: Vec<nominatim::Place> = response
            .json()
            .await
            .with_context(|| "Failed to parse Nominatim search response")?;

        match candidates.into_iter().next() {
            Some(place) => Ok(Some(place.coordinates()?)),
            None => {
                debug!("No geocoding candidates for '{}'", place_name);
                Ok(None)
            }
        }
    }
}

/// Nominatim API response structures
mod nominatim {
    use super::{Context, Coordinates, Result};
    use serde::Deserialize;

    /// One candidate match from the search endpoint.
    ///
    /// Nominatim reports coordinates as JSON strings.
    #[derive(Debug, Deserialize)]
    pub struct Place {
        pub lat: String,
        pub lon: String,
    }

    impl Place {
        pub fn coordinates(&self) -> Result<Coordinates> {
            let latitude = self
                .lat
                .parse::<f64>()
                .with_context(|| format!("Invalid latitude in geocoding response: {}", self.lat))?;
            let longitude = self
                .lon
                .parse::<f64>()
                .with_context(|| format!("Invalid longitude in geocoding response: {}", self.lon))?;
            Ok(Coordinates::new(latitude, longitude))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::nominatim::Place;
    use super::*;
    use crate::config::GeocoderConfig;

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let config = GeocoderConfig {
            base_url: "https://nominatim.openstreetmap.org/".to_string(),
            ..GeocoderConfig::default()
        };
        let client = GeocoderClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_place_parses_string_coordinates() {
        let json = r#"[{"lat": "48.8566", "lon": "2.3522", "display_name": "Paris"}]"#;
        let places: Vec<Place> = serde_json::from_str(json).unwrap();
        let coordinates = places[0].coordinates().unwrap();
        assert_eq!(coordinates, Coordinates::new(48.8566, 2.3522));
    }

    #[test]
    fn test_place_rejects_unparseable_coordinates() {
        let place = Place {
            lat: "not-a-number".to_string(),
            lon: "2.3522".to_string(),
        };
        assert!(place.coordinates().is_err());
    }
}
