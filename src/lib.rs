//! CityBrief - city briefing service
//!
//! This library aggregates three external geodata services - geocoding,
//! weather forecast and nearby restaurants - into a single briefing per
//! queried city, and exposes the result through one HTTP query endpoint.

pub mod api;
pub mod config;
pub mod error;
pub mod geocoder;
mod http;
pub mod models;
pub mod pipeline;
pub mod venues;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::CityBriefConfig;
pub use error::CityBriefError;
pub use models::{CityReport, Coordinates, Lookup, TemperatureSeries, Venue};
pub use pipeline::{CityQuery, QueryError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityBriefError>;
