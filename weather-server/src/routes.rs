use axum::{Router, routing::get};
use std::sync::Arc;
use weather_core::WeatherProvider;

use crate::handlers;

/// Shared read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub api_key_configured: bool,
}

/// Full HTTP surface of the gateway. Unmatched routes fall back to the main
/// page with a 404 status.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/manifest.json", get(handlers::manifest))
        .route("/service-worker.js", get(handlers::service_worker))
        .route("/api/weather/city/{city}", get(handlers::weather_by_city))
        .route(
            "/api/weather/coordinates",
            get(handlers::weather_by_coordinates),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::INDEX_HTML;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use weather_core::model::{Condition, Main, Sys, Wind};
    use weather_core::{NormalizedWeather, WeatherError};

    type StubResult = fn() -> Result<NormalizedWeather, WeatherError>;

    /// Canned provider; each path gets its own result factory.
    #[derive(Debug)]
    struct StubProvider {
        city: StubResult,
        coordinates: StubResult,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_by_city(&self, _city: &str) -> Result<NormalizedWeather, WeatherError> {
            (self.city)()
        }

        async fn current_by_coordinates(
            &self,
            _lat: &str,
            _lon: &str,
        ) -> Result<NormalizedWeather, WeatherError> {
            (self.coordinates)()
        }
    }

    fn sample() -> NormalizedWeather {
        NormalizedWeather {
            name: "Kyiv".to_string(),
            sys: Sys {
                country: "UA".to_string(),
            },
            main: Main {
                temp: 21.4,
                feels_like: 20.9,
                humidity: 56,
            },
            weather: vec![Condition {
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }],
            wind: Wind { speed: 3.1 },
            visibility: 10000,
        }
    }

    fn no_call() -> Result<NormalizedWeather, WeatherError> {
        panic!("handler must not reach the upstream provider")
    }

    fn app_with(city: StubResult, coordinates: StubResult, api_key_configured: bool) -> Router {
        router(AppState {
            provider: Arc::new(StubProvider { city, coordinates }),
            api_key_configured,
        })
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text_body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn city_success_returns_the_normalized_shape() {
        let app = app_with(|| Ok(sample()), no_call, true);

        let response = get(app, "/api/weather/city/Kyiv").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["name"], "Kyiv");
        assert_eq!(body["sys"]["country"], "UA");
        assert_eq!(body["main"]["temp"], 21.4);
        assert_eq!(body["main"]["feels_like"], 20.9);
        assert_eq!(body["main"]["humidity"], 56);
        assert_eq!(body["weather"][0]["main"], "Clear");
        assert_eq!(body["weather"][0]["description"], "clear sky");
        assert_eq!(body["weather"][0]["icon"], "01d");
        assert_eq!(body["wind"]["speed"], 3.1);
        assert_eq!(body["visibility"], 10000);
    }

    #[tokio::test]
    async fn city_not_found_is_a_404_envelope() {
        let app = app_with(|| Err(WeatherError::CityNotFound), no_call, true);

        let response = get(app, "/api/weather/city/Nowhereville").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "City not found");
    }

    #[tokio::test]
    async fn city_invalid_key_is_a_401_envelope() {
        let app = app_with(|| Err(WeatherError::InvalidApiKey), no_call, false);

        let response = get(app, "/api/weather/city/Kyiv").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error"], "Invalid API key");
    }

    #[tokio::test]
    async fn city_timeout_is_a_504_envelope() {
        let app = app_with(|| Err(WeatherError::Timeout), no_call, true);

        let response = get(app, "/api/weather/city/Kyiv").await;
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json_body(response).await["error"], "Request timeout");
    }

    #[tokio::test]
    async fn city_generic_upstream_failure_is_a_500_envelope() {
        let app = app_with(|| Err(WeatherError::UpstreamStatus(502)), no_call, true);

        let response = get(app, "/api/weather/city/Kyiv").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"],
            "Unable to fetch weather data"
        );
    }

    #[tokio::test]
    async fn coordinates_success_returns_the_normalized_shape() {
        let app = app_with(no_call, || Ok(sample()), true);

        let response = get(app, "/api/weather/coordinates?lat=50.45&lon=30.52").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "Kyiv");
    }

    #[tokio::test]
    async fn coordinates_with_missing_lon_reject_before_any_upstream_call() {
        let app = app_with(no_call, no_call, true);

        let response = get(app, "/api/weather/coordinates?lat=50.45").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Missing coordinates");
    }

    #[tokio::test]
    async fn coordinates_with_empty_lat_reject_before_any_upstream_call() {
        let app = app_with(no_call, no_call, true);

        let response = get(app, "/api/weather/coordinates?lat=&lon=30.52").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Missing coordinates");
    }

    #[tokio::test]
    async fn coordinates_upstream_404_collapses_to_a_generic_500() {
        let app = app_with(no_call, || Err(WeatherError::CityNotFound), true);

        let response = get(app, "/api/weather/coordinates?lat=50.45&lon=30.52").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"],
            "Unable to fetch weather data"
        );
    }

    #[tokio::test]
    async fn coordinates_timeout_stays_a_500() {
        let app = app_with(no_call, || Err(WeatherError::Timeout), true);

        let response = get(app, "/api/weather/coordinates?lat=50.45&lon=30.52").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_a_configured_key() {
        let app = app_with(no_call, no_call, true);

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["api_key_configured"], true);
        assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn health_reports_a_missing_key() {
        let app = app_with(no_call, no_call, false);

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["api_key_configured"], false);
    }

    #[tokio::test]
    async fn index_serves_the_main_page() {
        let app = app_with(no_call, no_call, true);

        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text_body(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn unmatched_route_serves_the_main_page_with_404() {
        let app = app_with(no_call, no_call, true);

        let response = get(app, "/definitely/not/a/route").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text_body(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn static_assets_carry_their_content_types() {
        let app = app_with(no_call, no_call, true);

        let response = get(app.clone(), "/manifest.json").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/manifest+json"
        );

        let response = get(app, "/service-worker.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
    }
}
