use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    Config,
    error::WeatherError,
    model::{Condition, Main, NormalizedWeather, Sys, Wind},
};

use super::WeatherProvider;

/// Bound on a single upstream request, connect plus body.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: Config,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: Config) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Issue one upstream request with the given location query, appending the
    /// configured API key and metric units, and translate the outcome.
    async fn fetch(&self, location: &[(&str, &str)]) -> Result<NormalizedWeather, WeatherError> {
        let res = self
            .http
            .get(&self.config.base_url)
            .query(location)
            .query(&[("appid", self.config.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        match status.as_u16() {
            200 => {}
            404 => return Err(WeatherError::CityNotFound),
            401 => return Err(WeatherError::InvalidApiKey),
            code => {
                tracing::warn!(%status, "upstream weather request failed");
                return Err(WeatherError::UpstreamStatus(code));
            }
        }

        let parsed: OwCurrentResponse = res
            .json()
            .await
            .map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;

        project(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<NormalizedWeather, WeatherError> {
        self.fetch(&[("q", city)]).await
    }

    async fn current_by_coordinates(
        &self,
        lat: &str,
        lon: &str,
    ) -> Result<NormalizedWeather, WeatherError> {
        self.fetch(&[("lat", lat), ("lon", lon)]).await
    }
}

fn transport_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout
    } else {
        WeatherError::Network(err.to_string())
    }
}

/// Project the upstream payload into the frontend shape, field for field.
/// All referenced fields are required; a payload without them already failed
/// deserialization, except the weather array which can be present but empty.
fn project(parsed: OwCurrentResponse) -> Result<NormalizedWeather, WeatherError> {
    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::MalformedPayload("empty weather array".to_string()))?;

    Ok(NormalizedWeather {
        name: parsed.name,
        sys: Sys {
            country: parsed.sys.country,
        },
        main: Main {
            temp: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            humidity: parsed.main.humidity,
        },
        weather: vec![Condition {
            main: condition.main,
            description: condition.description,
            icon: condition.icon,
        }],
        wind: Wind {
            speed: parsed.wind.speed,
        },
        visibility: parsed.visibility,
    })
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: u32,
}
