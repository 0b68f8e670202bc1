use serde::Deserialize;
use std::{convert::TryFrom, fmt};

/// A postal code as typed by the user, trimmed and known to be non-empty.
///
/// Whether the code actually exists is only known once the geocoding
/// service has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalQuery(String);

impl PostalQuery {
    /// Returns `None` for empty or whitespace-only input. Padded input such
    /// as `" 90210 "` is accepted and sent trimmed, where an untrimmed
    /// lookup would come back 404.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful `GET /us/{code}` on the geocoding service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResponse {
    #[serde(rename = "country abbreviation")]
    pub country_abbreviation: String,

    #[serde(rename = "post code", default)]
    pub post_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    pub places: Vec<GeocodePlace>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodePlace {
    #[serde(rename = "place name")]
    pub place_name: String,

    #[serde(rename = "state abbreviation")]
    pub state_abbreviation: String,

    #[serde(default)]
    pub state: Option<String>,
}

/// City, region and country a postal code resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoResult {
    pub place_name: String,
    pub region_abbreviation: String,
    pub country_abbreviation: String,
}

impl GeoResult {
    /// `city,region,country`, the form the weather service expects in `q`.
    pub fn query(&self) -> String {
        format!(
            "{},{},{}",
            self.place_name, self.region_abbreviation, self.country_abbreviation
        )
    }
}

/// Current conditions at a location. Temperatures are in whatever unit
/// system the request asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub current_temp: f64,
    pub low_temp: f64,
    pub high_temp: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported unit systems: imperial, metric."
            )),
        }
    }
}
