//! Core library for the weather gateway.
//!
//! This crate defines:
//! - Configuration resolved once from the environment
//! - Abstraction over the upstream weather provider
//! - The normalized weather shape served to the front-end
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, DEFAULT_BASE_URL, PLACEHOLDER_API_KEY};
pub use error::WeatherError;
pub use model::NormalizedWeather;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
