/// Credential for the weather service.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
/// Overrides the geocoding service base URL.
pub const GEOCODE_URL_VAR: &str = "ZIPWEATHER_GEOCODE_URL";
/// Overrides the weather service base URL.
pub const WEATHER_URL_VAR: &str = "ZIPWEATHER_WEATHER_URL";

pub const DEFAULT_GEOCODE_URL: &str = "https://api.zippopotam.us";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Runtime configuration, read once from the environment at startup and
/// handed to the clients that need it.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Weather service credential. Not checked until the first weather call.
    pub api_key: Option<String>,
    pub geocode_base_url: String,
    pub weather_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_base_url: DEFAULT_GEOCODE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("geocode_base_url", &self.geocode_base_url)
            .field("weather_base_url", &self.weather_base_url)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            api_key: get(API_KEY_VAR),
            geocode_base_url: get(GEOCODE_URL_VAR)
                .map(|url| normalize_base_url(&url))
                .unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
            weather_base_url: get(WEATHER_URL_VAR)
                .map(|url| normalize_base_url(&url))
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
