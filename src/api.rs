//! HTTP query interface
//!
//! Thin adapter between the HTTP protocol and the pipeline: a path segment
//! becomes a place name, a `CityReport` (or abort reason) becomes a JSON
//! response. Nothing in here knows how the briefing is produced.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::models::{CityReport, TemperatureSeries};
use crate::pipeline::{CityQuery, QueryError};

#[derive(Serialize, Deserialize)]
pub struct ApiCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWeather {
    #[serde(rename = "temperatureMax7Days")]
    pub temperature_max_7_days: Vec<f32>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiVenue {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiCityReport {
    pub coordinates: ApiCoordinates,
    pub weather: ApiWeather,
    pub restaurants: Vec<ApiVenue>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWeatherTomorrow {
    #[serde(rename = "temperatureMaxTomorrow")]
    pub temperature_max_tomorrow: f32,
}

impl From<&CityReport> for ApiCityReport {
    fn from(report: &CityReport) -> Self {
        Self {
            coordinates: ApiCoordinates {
                latitude: report.coordinates.latitude,
                longitude: report.coordinates.longitude,
            },
            weather: ApiWeather::from(&report.weather),
            restaurants: report
                .restaurants
                .iter()
                .map(|venue| ApiVenue {
                    name: venue.name.clone(),
                    address: venue.address.clone(),
                })
                .collect(),
        }
    }
}

impl From<&TemperatureSeries> for ApiWeather {
    fn from(series: &TemperatureSeries) -> Self {
        Self {
            temperature_max_7_days: series.values().to_vec(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Query-level failures surfaced over HTTP.
#[derive(Debug)]
pub enum ApiError {
    EmptyCityName,
    Query(QueryError),
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        Self::Query(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EmptyCityName => (
                StatusCode::BAD_REQUEST,
                "city name must not be empty".to_string(),
            ),
            ApiError::Query(error) => (StatusCode::NOT_FOUND, error.to_string()),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

pub fn router(query: Arc<CityQuery>) -> Router {
    Router::new()
        .route("/city/{name}", get(get_city))
        .route("/city/{name}/weather", get(get_city_weather))
        .route("/city/{name}/weather/tomorrow", get(get_city_weather_tomorrow))
        .with_state(query)
}

/// The only input validation the interface performs: presence.
fn validated(name: &str) -> Result<&str, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ApiError::EmptyCityName)
    } else {
        Ok(name)
    }
}

async fn get_city(
    State(query): State<Arc<CityQuery>>,
    Path(name): Path<String>,
) -> Result<Json<ApiCityReport>, ApiError> {
    let report = query.run(validated(&name)?).await?;
    Ok(Json(ApiCityReport::from(&report)))
}

async fn get_city_weather(
    State(query): State<Arc<CityQuery>>,
    Path(name): Path<String>,
) -> Result<Json<ApiWeather>, ApiError> {
    let (_, series) = query.weather_outlook(validated(&name)?).await?;
    Ok(Json(ApiWeather::from(&series)))
}

async fn get_city_weather_tomorrow(
    State(query): State<Arc<CityQuery>>,
    Path(name): Path<String>,
) -> Result<Json<ApiWeatherTomorrow>, ApiError> {
    let (_, series) = query.weather_outlook(validated(&name)?).await?;
    let temperature_max_tomorrow = series
        .tomorrow()
        .ok_or(ApiError::Query(QueryError::ForecastNotFound))?;
    Ok(Json(ApiWeatherTomorrow {
        temperature_max_tomorrow,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Venue};

    #[test]
    fn test_report_to_api_shape() {
        let report = CityReport::assemble(
            Coordinates::new(48.8566, 2.3522),
            TemperatureSeries::from_daily_max(vec![Some(24.5), Some(26.0)]),
            vec![Venue {
                name: Some("Chez Louise".to_string()),
                address: None,
            }],
        );

        let api_report = ApiCityReport::from(&report);
        let json = serde_json::to_value(&api_report).unwrap();

        assert_eq!(json["coordinates"]["latitude"], 48.8566);
        assert_eq!(json["weather"]["temperatureMax7Days"][1], 26.0);
        assert_eq!(json["restaurants"][0]["name"], "Chez Louise");
        assert!(json["restaurants"][0]["address"].is_null());
    }

    #[test]
    fn test_validated_trims_and_rejects_empty() {
        assert_eq!(validated("  Paris ").unwrap(), "Paris");
        assert!(matches!(validated("   "), Err(ApiError::EmptyCityName)));
    }
}
