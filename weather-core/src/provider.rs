use crate::{error::WeatherError, model::NormalizedWeather};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the upstream weather source.
///
/// The server holds this behind a trait object so handler tests can swap in
/// a stub without any network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current weather for a city name.
    async fn current_by_city(&self, city: &str) -> Result<NormalizedWeather, WeatherError>;

    /// Current weather for a latitude/longitude pair. Coordinates are passed
    /// through to the upstream query string as received.
    async fn current_by_coordinates(
        &self,
        lat: &str,
        lon: &str,
    ) -> Result<NormalizedWeather, WeatherError>;
}
