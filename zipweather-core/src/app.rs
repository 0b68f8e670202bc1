use tracing::debug;

use crate::{
    error::{Result, ZipWeatherError},
    geocode::GeocodingService,
    model::{GeoResult, UnitSystem, WeatherResult},
    prompt::{PostalInput, WarningSink},
    provider::WeatherProvider,
    resolver::resolve_location,
    validator::PostalCodeValidator,
};

/// Ask for a zip code, resolve it and fetch the weather there. Returns the
/// summary sentence to print.
pub async fn run(
    units: UnitSystem,
    input: &mut dyn PostalInput,
    warnings: &mut dyn WarningSink,
    geocoder: &dyn GeocodingService,
    weather: &dyn WeatherProvider,
) -> Result<String> {
    let confirmed = PostalCodeValidator::new(input, warnings, geocoder)
        .acquire_valid_postal_code()
        .await?;

    let location = resolve_location(&confirmed.response).map_err(|err| match err {
        ZipWeatherError::NoPlaces { .. } => ZipWeatherError::NoPlaces {
            postal_code: confirmed.query.to_string(),
        },
        other => other,
    })?;
    debug!(place = %location.place_name, region = %location.region_abbreviation, "resolved zip code");

    let conditions = weather.get_weather(&location, units).await?;
    Ok(format_summary(&location, &conditions))
}

pub fn format_summary(location: &GeoResult, weather: &WeatherResult) -> String {
    format!(
        "The weather in {} is {}.  It's currently {} with a low of {} and high of {}.",
        location.place_name,
        weather.description,
        weather.current_temp,
        weather.low_temp,
        weather.high_temp,
    )
}
