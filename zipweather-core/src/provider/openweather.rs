use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Result, ZipWeatherError},
    model::{GeoResult, UnitSystem, WeatherResult},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, api_key: &str, query: &str, units: UnitSystem) -> Result<WeatherResult> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("APPID", api_key), ("units", units.as_str()), ("q", query)])
            .send()
            .await
            .map_err(ZipWeatherError::WeatherRequest)?;

        let status = res.status();
        let body = res.text().await.map_err(ZipWeatherError::WeatherRequest)?;

        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "weather request failed");
            return Err(ZipWeatherError::WeatherStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    weather: Vec<OwWeather>,
    main: OwMain,
}

fn parse_current(body: &str) -> Result<WeatherResult> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(ZipWeatherError::WeatherDecode)?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .unwrap_or_else(|| "unknown".to_string());

    Ok(WeatherResult {
        current_temp: parsed.main.temp,
        low_temp: parsed.main.temp_min,
        high_temp: parsed.main.temp_max,
        description,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, location: &GeoResult, units: UnitSystem) -> Result<WeatherResult> {
        let api_key = self.api_key.as_deref().ok_or(ZipWeatherError::MissingApiKey)?;
        let query = location.query();

        debug!(%query, %units, "fetching current weather");
        self.fetch_current(api_key, &query, units).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
