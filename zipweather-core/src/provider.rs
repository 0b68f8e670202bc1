use crate::{
    Config, GeoResult, UnitSystem, WeatherResult, error::Result,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions at `location`. Any non-200 reply is an error.
    async fn get_weather(&self, location: &GeoResult, units: UnitSystem) -> Result<WeatherResult>;
}

/// Construct the weather provider from config. The API key is passed in
/// as-is; a missing key is reported on the first request.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        config.weather_base_url.clone(),
    ))
}
