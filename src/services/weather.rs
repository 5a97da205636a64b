//! OpenWeather service implementation
//!
//! Wraps the two provider calls the bot needs: geocoding a free-text city
//! name and reading current conditions for a coordinate pair. There is no
//! caching and no retry; every failure is reported to the caller.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;
use crate::config::WeatherConfig;
use crate::models::{Coordinates, Weather};
use crate::utils::errors::{WeatherBuddyError, WeatherError, WeatherResult, Result};
use crate::utils::helpers::mask_secret;

/// Maximum number of geocoding candidates requested
pub const GEOCODING_LIMIT: u32 = 5;

/// One candidate from the geocoding endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingCandidate {
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Current-conditions response, reduced to the fields the bot reads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MainReadings {
    pub temp: f64,
}

/// Weather lookups used by the command handlers
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Resolve a city name to the coordinates of its first match
    async fn resolve_coordinates(&self, city: &str) -> WeatherResult<Coordinates>;

    /// Read the current temperature in Celsius at the given position
    async fn current_temperature(&self, lat: f64, lon: f64) -> WeatherResult<Weather>;
}

/// OpenWeather HTTP client
#[derive(Clone)]
#[derive(Debug)]
pub struct WeatherService {
    client: Client,
    api_key: String,
    geocoding_url: Url,
    current_weather_url: Url,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("weather-buddy/", env!("CARGO_PKG_VERSION")));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherBuddyError::Weather(WeatherError::Transport(e)))?;

        let geocoding_url = endpoint(&config.geo_base_url, "geo/1.0/direct")?;
        let current_weather_url = endpoint(&config.api_base_url, "data/2.5/weather")?;

        info!(
            geocoding_url = %geocoding_url,
            current_weather_url = %current_weather_url,
            api_key = %mask_secret(&config.api_key),
            "OpenWeather client initialized"
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            geocoding_url,
            current_weather_url,
        })
    }

    /// Send a GET and decode the JSON body, mapping failures onto `WeatherError`
    async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> WeatherResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| WeatherError::Decode(e.to_string()))
    }
}

/// Join a provider path onto a configured base URL
fn endpoint(base: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path)?)
}

#[async_trait]
impl WeatherApi for WeatherService {
    async fn resolve_coordinates(&self, city: &str) -> WeatherResult<Coordinates> {
        debug!(city = %city, "Resolving coordinates");

        let candidates: Vec<GeocodingCandidate> = self
            .get_json(
                self.geocoding_url.clone(),
                &[
                    ("q", city.to_string()),
                    ("limit", GEOCODING_LIMIT.to_string()),
                    ("appid", self.api_key.clone()),
                ],
            )
            .await?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        debug!(city = %city, matched = %first.name, lat = first.lat, lon = first.lon, "Coordinates resolved");
        Ok(Coordinates {
            lat: first.lat,
            lon: first.lon,
        })
    }

    async fn current_temperature(&self, lat: f64, lon: f64) -> WeatherResult<Weather> {
        debug!(lat = lat, lon = lon, "Fetching current weather");

        let response: CurrentWeatherResponse = self
            .get_json(
                self.current_weather_url.clone(),
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", self.api_key.clone()),
                    ("units", "metric".to_string()),
                ],
            )
            .await?;

        Ok(Weather {
            temperature: response.main.temp,
        })
    }
}
