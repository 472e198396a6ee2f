//! Daily maximum-temperature series returned by the weather lookup

use serde::{Deserialize, Serialize};

/// Number of forecast days requested from the upstream service.
pub const FORECAST_DAYS: usize = 7;

/// Ordered daily maximum temperatures, at most [`FORECAST_DAYS`] entries.
///
/// Index 0 is "tomorrow" by the upstream source's timezone convention.
/// Immutable once fetched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TemperatureSeries {
    values: Vec<f32>,
}

impl TemperatureSeries {
    /// Build a series from the upstream daily-maximum array.
    ///
    /// Entries the upstream reports as null are skipped; anything beyond
    /// [`FORECAST_DAYS`] values is dropped.
    #[must_use]
    pub fn from_daily_max(daily_max: Vec<Option<f32>>) -> Self {
        let values = daily_max
            .into_iter()
            .flatten()
            .take(FORECAST_DAYS)
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Temperature for the first forecast day.
    #[must_use]
    pub fn tomorrow(&self) -> Option<f32> {
        self.values.first().copied()
    }
}
