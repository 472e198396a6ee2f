//! The aggregate briefing assembled by the query pipeline

use serde::{Deserialize, Serialize};

use super::{Coordinates, TemperatureSeries, Venue};

/// Maximum number of venues included in a briefing.
pub const MAX_VENUES: usize = 3;

/// The aggregate output of one successful query.
///
/// Constructed fresh per query; has no persistence or identity beyond the
/// request that produced it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityReport {
    pub coordinates: Coordinates,
    pub weather: TemperatureSeries,
    pub restaurants: Vec<Venue>,
}

impl CityReport {
    /// Assemble a report from the pipeline's stage outputs.
    ///
    /// Coordinates and series pass through unchanged; venues are truncated
    /// to the first [`MAX_VENUES`] entries in upstream order.
    #[must_use]
    pub fn assemble(
        coordinates: Coordinates,
        weather: TemperatureSeries,
        mut venues: Vec<Venue>,
    ) -> Self {
        venues.truncate(MAX_VENUES);
        Self {
            coordinates,
            weather,
            restaurants: venues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: &str) -> Venue {
        Venue {
            name: Some(name.to_string()),
            address: None,
        }
    }

    #[test]
    fn test_assemble_truncates_to_first_three_in_order() {
        let venues = vec![
            venue("first"),
            venue("second"),
            venue("third"),
            venue("fourth"),
            venue("fifth"),
        ];
        let report = CityReport::assemble(
            Coordinates::new(48.8566, 2.3522),
            TemperatureSeries::from_daily_max(vec![Some(20.0)]),
            venues,
        );

        assert_eq!(report.restaurants.len(), MAX_VENUES);
        assert_eq!(report.restaurants[0].name.as_deref(), Some("first"));
        assert_eq!(report.restaurants[1].name.as_deref(), Some("second"));
        assert_eq!(report.restaurants[2].name.as_deref(), Some("third"));
    }

    #[test]
    fn test_assemble_keeps_short_lists_untouched() {
        let report = CityReport::assemble(
            Coordinates::new(0.0, 0.0),
            TemperatureSeries::from_daily_max(vec![]),
            vec![venue("only")],
        );
        assert_eq!(report.restaurants.len(), 1);
    }
}
