use serde::{Deserialize, Serialize};

/// Reshaped, frontend-facing subset of the upstream provider's response.
///
/// The nesting mirrors the JSON the front-end consumes: `name`, `sys.country`,
/// `main.{temp,feels_like,humidity}`, `weather[0].{main,description,icon}`,
/// `wind.speed` and `visibility`, copied verbatim from the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeather {
    pub name: String,
    pub sys: Sys,
    pub main: Main,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub visibility: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}
