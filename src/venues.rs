//! Points-of-interest adapter backed by the OSM map API
//!
//! Expands a coordinate pair into a small bounding box, fetches every map
//! element inside it and keeps the ones tagged as restaurants, in upstream
//! order. Truncation to the briefing limit happens at assembly, not here.

use anyhow::{Context, Result, anyhow};
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, instrument};

use crate::config::VenuesConfig;
use crate::http;
use crate::models::{Coordinates, Lookup, Venue};

/// Fixed expansion applied independently on each axis around the center.
const BBOX_MARGIN_DEGREES: f64 = 0.01;

/// The amenity tag value the lookup filters on.
const VENUE_CATEGORY: &str = "restaurant";

/// Rectangular coordinate range scoping the map lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Expand a center coordinate by [`BBOX_MARGIN_DEGREES`] on each axis.
    #[must_use]
    pub fn around(center: Coordinates) -> Self {
        Self {
            min_lon: center.longitude - BBOX_MARGIN_DEGREES,
            min_lat: center.latitude - BBOX_MARGIN_DEGREES,
            max_lon: center.longitude + BBOX_MARGIN_DEGREES,
            max_lat: center.latitude + BBOX_MARGIN_DEGREES,
        }
    }

    /// Format as the `bbox` query parameter the map API expects.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

pub struct VenueClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl VenueClient {
    pub fn new(config: &VenuesConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, config.max_retries)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch restaurants near the coordinates, upstream order preserved.
    ///
    /// A successful call with zero matches is `Found` with an empty list;
    /// only a call that produces no usable answer is `Failed`.
    #[instrument(skip(self), fields(coordinates = %center.format()))]
    pub async fn nearby(&self, center: Coordinates) -> Lookup<Vec<Venue>> {
        Lookup::from_result(self.fetch_restaurants(center).await.map(Some))
    }

    async fn fetch_restaurants(&self, center: Coordinates) -> Result<Vec<Venue>> {
        let bbox = BoundingBox::around(center);
        let url = format!("{}/map.json?bbox={}", self.base_url, bbox.to_query());
        debug!("Map request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "map request failed with status {}",
                response.status()
            ));
        }

        let map: osm::MapResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OSM map response")?;

        let venues: Vec<Venue> = map
            .elements
            .iter()
            .filter(|element| {
                element
                    .tags
                    .get("amenity")
                    .is_some_and(|amenity| amenity == VENUE_CATEGORY)
            })
            .map(|element| Venue::from_tags(&element.tags))
            .collect();

        debug!(
            "Map response: {} elements, {} tagged {}",
            map.elements.len(),
            venues.len(),
            VENUE_CATEGORY
        );
        Ok(venues)
    }
}

/// OSM map API response structures
mod osm {
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize)]
    pub struct MapResponse {
        #[serde(default)]
        pub elements: Vec<Element>,
    }

    /// A map element; untagged elements carry an empty tag map and never
    /// match the category filter.
    #[derive(Debug, Deserialize)]
    pub struct Element {
        #[serde(default)]
        pub tags: HashMap<String, String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(48.8566, 2.3522)]
    #[case(0.0, 0.0)]
    #[case(-33.8688, 151.2093)]
    fn test_bounding_box_expansion(#[case] lat: f64, #[case] lon: f64) {
        let bbox = BoundingBox::around(Coordinates::new(lat, lon));
        assert_eq!(bbox.min_lon, lon - 0.01);
        assert_eq!(bbox.min_lat, lat - 0.01);
        assert_eq!(bbox.max_lon, lon + 0.01);
        assert_eq!(bbox.max_lat, lat + 0.01);
    }

    #[test]
    fn test_bounding_box_query_order() {
        let bbox = BoundingBox {
            min_lon: 19.99,
            min_lat: 9.99,
            max_lon: 20.01,
            max_lat: 10.01,
        };
        assert_eq!(bbox.to_query(), "19.99,9.99,20.01,10.01");
    }

    #[test]
    fn test_map_response_skips_untagged_elements() {
        let json = r#"{
            "elements": [
                {"type": "node", "id": 1},
                {"type": "node", "id": 2, "tags": {"amenity": "restaurant", "name": "A"}}
            ]
        }"#;
        let map: osm::MapResponse = serde_json::from_str(json).unwrap();
        assert_eq!(map.elements.len(), 2);
        assert!(map.elements[0].tags.is_empty());
        assert_eq!(
            map.elements[1].tags.get("amenity").map(String::as_str),
            Some("restaurant")
        );
    }
}
