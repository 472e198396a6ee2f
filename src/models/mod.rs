//! Data models for the CityBrief service
//!
//! This module contains the core domain models organized by concern:
//! - Location: geographic coordinates from the geocoder
//! - Forecast: daily maximum-temperature series
//! - Venue: nearby tagged venues from the map service
//! - City: the aggregate briefing assembled per query

pub mod city;
pub mod forecast;
pub mod location;
pub mod venue;

// Re-export all public types for convenient access
pub use city::{CityReport, MAX_VENUES};
pub use forecast::{FORECAST_DAYS, TemperatureSeries};
pub use location::Coordinates;
pub use venue::Venue;

/// Outcome of one upstream lookup.
///
/// `Missing` means the upstream answered but had nothing for us; `Failed`
/// carries the cause of a call that never produced an answer (network error,
/// non-2xx status, malformed body). The pipeline decides how the two are
/// surfaced to the caller.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Failed(anyhow::Error),
}

impl<T> Lookup<T> {
    /// Wrap an adapter result, folding errors into `Failed`.
    pub fn from_result(result: anyhow::Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::Missing,
            Err(cause) => Lookup::Failed(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_lookup_from_result() {
        assert!(matches!(
            Lookup::from_result(Ok(Some(1))),
            Lookup::Found(1)
        ));
        assert!(matches!(
            Lookup::<i32>::from_result(Ok(None)),
            Lookup::Missing
        ));
        assert!(matches!(
            Lookup::<i32>::from_result(Err(anyhow!("boom"))),
            Lookup::Failed(_)
        ));
    }
}
