//! # skycast-weather
//!
//! Client for the third-party geocoding + current-weather HTTP API.
//! Maps upstream responses into typed records and upstream failures into
//! a small error taxonomy (auth failure vs. any other non-success).

mod client;
mod error;
mod types;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use types::{
    Clouds, Coordinates, CurrentWeather, GeocodingEntry, LocalNames, Location, MainTemp,
    Precipitation, SysInfo, Wind,
};
