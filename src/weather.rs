//! Weather forecast adapter backed by the Open-Meteo API
//!
//! Requests a fixed 7-day daily maximum-temperature forecast for a
//! coordinate pair. The horizon is fixed; the reporting timezone comes from
//! configuration.

use anyhow::{Context, Result, anyhow};
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;
use crate::http;
use crate::models::{Coordinates, FORECAST_DAYS, Lookup, TemperatureSeries};

pub struct WeatherClient {
    client: ClientWithMiddleware,
    base_url: String,
    timezone: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, config.max_retries)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timezone: config.timezone.clone(),
        })
    }

    /// Fetch the daily maximum-temperature series for the coordinates.
    ///
    /// `Missing` when the upstream response carries no daily data; `Failed`
    /// when the call itself does not produce a usable answer.
    #[instrument(skip(self), fields(coordinates = %coordinates.format()))]
    pub async fn outlook(&self, coordinates: Coordinates) -> Lookup<TemperatureSeries> {
        Lookup::from_result(self.fetch_daily_max(coordinates).await)
    }

    async fn fetch_daily_max(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<TemperatureSeries>> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&forecast_days={}&daily=temperature_2m_max&timezone={}",
            self.base_url,
            coordinates.latitude,
            coordinates.longitude,
            FORECAST_DAYS,
            urlencoding::encode(&self.timezone)
        );
        debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "forecast request failed with status {}",
                response.status()
            ));
        }

        let forecast: open_meteo::ForecastResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse Open-Meteo forecast response")?;

        let Some(daily) = forecast.daily else {
            debug!("Forecast response carries no daily data");
            return Ok(None);
        };

        let series = TemperatureSeries::from_daily_max(daily.temperature_max);
        if series.is_empty() {
            debug!("Forecast response carries an empty temperature series");
            return Ok(None);
        }

        Ok(Some(series))
    }
}

/// Open-Meteo API response structures
mod open_meteo {
    use serde::Deserialize;

    /// Forecast response; `daily` is absent when the upstream has nothing
    /// for the requested coordinates.
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailyData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        #[serde(rename = "temperature_2m_max", default)]
        pub temperature_max: Vec<Option<f32>>,
    }
}

#[cfg(test)]
mod tests {
    use super::open_meteo::ForecastResponse;
    use super::*;

    #[test]
    fn test_forecast_response_with_daily_data() {
        let json = r#"{
            "latitude": 48.86,
            "longitude": 2.35,
            "daily": {"time": ["2026-08-08"], "temperature_2m_max": [24.5, null, 26.0]}
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let daily = response.daily.unwrap();
        assert_eq!(daily.temperature_max, vec![Some(24.5), None, Some(26.0)]);
    }

    #[test]
    fn test_forecast_response_without_daily_data() {
        let json = r#"{"latitude": 48.86, "longitude": 2.35}"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(response.daily.is_none());
    }
}
