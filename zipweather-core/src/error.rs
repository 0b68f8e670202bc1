use thiserror::Error;

/// Failures that end a lookup. Recoverable problems (blank input, unknown
/// zip code, geocoding outages) are retried by the validator and never
/// surface here.
#[derive(Debug, Error)]
pub enum ZipWeatherError {
    #[error("input closed before a valid zip code was entered")]
    InputClosed,

    #[error("failed to read zip code: {0}")]
    Input(#[from] std::io::Error),

    #[error("failed to parse zip code service response: {0}")]
    GeocodeDecode(#[source] serde_json::Error),

    #[error("zip code service returned no places for '{postal_code}'")]
    NoPlaces { postal_code: String },

    #[error("no API key for the weather service; set WEATHER_API_KEY")]
    MissingApiKey,

    #[error("failed to send request to the weather service: {0}")]
    WeatherRequest(#[source] reqwest::Error),

    #[error("weather request failed with status {status}: {body}")]
    WeatherStatus { status: u16, body: String },

    #[error("failed to parse weather service response: {0}")]
    WeatherDecode(#[source] serde_json::Error),
}

impl ZipWeatherError {
    /// Short text shown to the user before the process exits.
    pub fn warning(&self) -> &'static str {
        match self {
            ZipWeatherError::InputClosed => "No zip code entered!",
            ZipWeatherError::Input(_) => "Could not read zip code!",
            ZipWeatherError::GeocodeDecode(_) => "Unreadable response from zip code service!",
            ZipWeatherError::NoPlaces { .. } => "No places found for zip code!",
            ZipWeatherError::MissingApiKey => "Missing weather API key!",
            ZipWeatherError::WeatherRequest(_)
            | ZipWeatherError::WeatherStatus { .. }
            | ZipWeatherError::WeatherDecode(_) => "Error fetching weather!",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZipWeatherError>;
