//! Geographic coordinates produced by the geocoder

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Produced once per query by the geocoder and handed unchanged to the
/// weather and venue lookups.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a short "lat, lon" string for log lines.
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounds_to_four_places() {
        let coordinates = Coordinates::new(48.856_614, 2.352_221);
        assert_eq!(coordinates.format(), "48.8566, 2.3522");
    }
}
