//! Aggregation pipeline sequencing the three upstream lookups
//!
//! Stages run strictly in order, each one a precondition for the next:
//! geocode, forecast, venues, assemble. The first stage that comes back
//! empty aborts the rest of the query with its named reason.

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::CityBriefConfig;
use crate::geocoder::GeocoderClient;
use crate::models::{CityReport, Coordinates, Lookup, TemperatureSeries, Venue};
use crate::venues::VenueClient;
use crate::weather::WeatherClient;

/// Terminal abort reasons of one query. No retry, no partial result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("place not found")]
    PlaceNotFound,
    #[error("forecast not found")]
    ForecastNotFound,
    #[error("venues not found")]
    VenuesNotFound,
}

/// The query pipeline: one entry point, one success exit, three named
/// abort reasons.
pub struct CityQuery {
    geocoder: GeocoderClient,
    forecast: WeatherClient,
    venues: VenueClient,
}

impl CityQuery {
    pub fn new(config: &CityBriefConfig) -> Result<Self> {
        Ok(Self {
            geocoder: GeocoderClient::new(&config.geocoder)?,
            forecast: WeatherClient::new(&config.weather)?,
            venues: VenueClient::new(&config.venues)?,
        })
    }

    /// Run the full pipeline for a place name and assemble the briefing.
    #[instrument(skip(self))]
    pub async fn run(&self, place_name: &str) -> Result<CityReport, QueryError> {
        let (coordinates, weather) = self.weather_outlook(place_name).await?;
        let venues = self.restaurants(coordinates).await?;

        let report = CityReport::assemble(coordinates, weather, venues);
        info!(
            "Assembled briefing for '{}': {} forecast days, {} restaurants",
            place_name,
            report.weather.len(),
            report.restaurants.len()
        );
        Ok(report)
    }

    /// Run the geocode and forecast stages only.
    ///
    /// Serves the weather-only operations; the venue stage is never invoked
    /// on this path.
    #[instrument(skip(self))]
    pub async fn weather_outlook(
        &self,
        place_name: &str,
    ) -> Result<(Coordinates, TemperatureSeries), QueryError> {
        let coordinates = self.locate(place_name).await?;
        let weather = self.outlook(coordinates).await?;
        Ok((coordinates, weather))
    }

    async fn locate(&self, place_name: &str) -> Result<Coordinates, QueryError> {
        match self.geocoder.resolve(place_name).await {
            Lookup::Found(coordinates) => {
                debug!("Resolved '{}' to ({})", place_name, coordinates.format());
                Ok(coordinates)
            }
            Lookup::Missing => {
                info!("No geocoding match for '{}'", place_name);
                Err(QueryError::PlaceNotFound)
            }
            Lookup::Failed(cause) => {
                warn!(
                    "Geocoder unavailable, reporting place as not found: {:#}",
                    cause
                );
                Err(QueryError::PlaceNotFound)
            }
        }
    }

    async fn outlook(&self, coordinates: Coordinates) -> Result<TemperatureSeries, QueryError> {
        match self.forecast.outlook(coordinates).await {
            Lookup::Found(series) => Ok(series),
            Lookup::Missing => {
                info!("No forecast data for ({})", coordinates.format());
                Err(QueryError::ForecastNotFound)
            }
            Lookup::Failed(cause) => {
                warn!(
                    "Forecast service unavailable, reporting forecast as not found: {:#}",
                    cause
                );
                Err(QueryError::ForecastNotFound)
            }
        }
    }

    async fn restaurants(&self, coordinates: Coordinates) -> Result<Vec<Venue>, QueryError> {
        match self.venues.nearby(coordinates).await {
            Lookup::Found(venues) if !venues.is_empty() => Ok(venues),
            Lookup::Found(_) | Lookup::Missing => {
                info!("No restaurants near ({})", coordinates.format());
                Err(QueryError::VenuesNotFound)
            }
            Lookup::Failed(cause) => {
                warn!(
                    "Map service unavailable, reporting venues as not found: {:#}",
                    cause
                );
                Err(QueryError::VenuesNotFound)
            }
        }
    }
}
