use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use weather_core::{NormalizedWeather, WeatherError};

use crate::{error::ApiError, routes::AppState};

pub const INDEX_HTML: &str = include_str!("../static/index.html");
const MANIFEST_JSON: &str = include_str!("../static/manifest.json");
const SERVICE_WORKER_JS: &str = include_str!("../static/service-worker.js");

/// GET `/` — the main page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET `/manifest.json` — PWA manifest.
pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        MANIFEST_JSON,
    )
}

/// GET `/service-worker.js` — PWA service worker.
pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SERVICE_WORKER_JS,
    )
}

/// GET `/api/weather/city/{city}`.
pub async fn weather_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<NormalizedWeather>, ApiError> {
    state
        .provider
        .current_by_city(&city)
        .await
        .map(Json)
        .map_err(map_city_error)
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    lat: Option<String>,
    lon: Option<String>,
}

/// GET `/api/weather/coordinates?lat=..&lon=..`.
///
/// Both coordinates must be present and non-empty, otherwise the request is
/// rejected before any upstream call is made.
pub async fn weather_by_coordinates(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<NormalizedWeather>, ApiError> {
    let (lat, lon) = match (query.lat.as_deref(), query.lon.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => return Err(ApiError::new(StatusCode::BAD_REQUEST, "Missing coordinates")),
    };

    state
        .provider
        .current_by_coordinates(lat, lon)
        .await
        .map(Json)
        .map_err(map_coordinates_error)
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    timestamp: String,
    api_key_configured: bool,
}

/// GET `/health` — always succeeds.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        api_key_configured: state.api_key_configured,
    })
}

/// Fallback for unmatched routes: the main page body with a 404 status.
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(INDEX_HTML))
}

/// Status mapping for the city path. 404 and 401 from upstream keep their
/// status; a timeout is reported as 504.
fn map_city_error(err: WeatherError) -> ApiError {
    match err {
        WeatherError::CityNotFound => ApiError::new(StatusCode::NOT_FOUND, "City not found"),
        WeatherError::InvalidApiKey => ApiError::new(StatusCode::UNAUTHORIZED, "Invalid API key"),
        WeatherError::UpstreamStatus(_) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to fetch weather data",
        ),
        WeatherError::Timeout => ApiError::new(StatusCode::GATEWAY_TIMEOUT, "Request timeout"),
        WeatherError::Network(message) => {
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        WeatherError::MalformedPayload(detail) => {
            tracing::error!(%detail, "upstream payload did not match the expected shape");
            ApiError::internal()
        }
    }
}

/// Status mapping for the coordinate path. Deliberately coarser than the city
/// path: every upstream status collapses to a generic 500, and a timeout is
/// not given its own status either. Kept for parity with the original
/// service's behavior.
fn map_coordinates_error(err: WeatherError) -> ApiError {
    match err {
        WeatherError::CityNotFound
        | WeatherError::InvalidApiKey
        | WeatherError::UpstreamStatus(_) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to fetch weather data",
        ),
        WeatherError::Timeout | WeatherError::Network(_) => {
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        WeatherError::MalformedPayload(detail) => {
            tracing::error!(%detail, "upstream payload did not match the expected shape");
            ApiError::internal()
        }
    }
}
