//! Mock OpenWeather API server for testing
//!
//! Wraps a wiremock server exposing the geocoding and current-weather
//! endpoints with configurable responses.

use serde_json::{json, Value};
use weather_buddy::config::WeatherConfig;
use weather_buddy::services::WeatherService;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_API_KEY: &str = "test_owm_key";
pub const GEOCODING_PATH: &str = "/geo/1.0/direct";
pub const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Mock weather provider for testing
pub struct WeatherMockServer {
    pub server: MockServer,
}

impl WeatherMockServer {
    /// Create a new mock weather provider
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Weather settings pointing both endpoints at the mock
    pub fn weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            api_key: TEST_API_KEY.to_string(),
            geo_base_url: self.server.uri(),
            api_base_url: self.server.uri(),
            timeout_seconds: Some(5),
        }
    }

    /// A real client talking to the mock
    pub fn weather_service(&self) -> WeatherService {
        WeatherService::new(&self.weather_config()).expect("weather service should build")
    }

    /// Geocoding for `city` answers with one candidate, expected exactly once
    pub async fn mock_geocoding(&self, city: &str, lat: f64, lon: f64) {
        self.mock_geocoding_candidates(city, json!([{"name": city, "lat": lat, "lon": lon, "country": "XX"}]))
            .await;
    }

    /// Geocoding for `city` answers with the given body, expected exactly once
    pub async fn mock_geocoding_candidates(&self, city: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(GEOCODING_PATH))
            .and(query_param("q", city))
            .and(query_param("limit", "5"))
            .and(query_param("appid", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .named(format!("geocoding {}", city))
            .mount(&self.server)
            .await;
    }

    /// Geocoding for `city` must never be requested
    pub async fn forbid_geocoding(&self, city: &str) {
        Mock::given(method("GET"))
            .and(path(GEOCODING_PATH))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .named(format!("forbidden geocoding {}", city))
            .mount(&self.server)
            .await;
    }

    /// Current weather answers with `temp`, expected exactly once
    pub async fn mock_current_weather(&self, lat: f64, lon: f64, temp: f64) {
        Mock::given(method("GET"))
            .and(path(CURRENT_WEATHER_PATH))
            .and(query_param("lat", lat.to_string()))
            .and(query_param("lon", lon.to_string()))
            .and(query_param("units", "metric"))
            .and(query_param("appid", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "coord": {"lat": lat, "lon": lon},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
                "main": {"temp": temp, "feels_like": temp, "humidity": 50},
                "name": "Test City"
            })))
            .expect(1)
            .named("current weather")
            .mount(&self.server)
            .await;
    }

    /// Current weather must never be requested
    pub async fn forbid_current_weather(&self) {
        Mock::given(method("GET"))
            .and(path(CURRENT_WEATHER_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .named("forbidden current weather")
            .mount(&self.server)
            .await;
    }

    /// Any request to `endpoint` fails with `status`
    pub async fn mock_status(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "cod": status,
                "message": "mocked failure"
            })))
            .mount(&self.server)
            .await;
    }

    /// Any request to `endpoint` gets a body that is not the expected JSON
    pub async fn mock_malformed(&self, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the mock has seen so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
