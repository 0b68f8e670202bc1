use crate::{
    error::{Result, ZipWeatherError},
    model::{GeoResult, GeocodeResponse},
};

/// Pick the first place in a geocoding response and pair it with the
/// response's country.
pub fn resolve_location(response: &GeocodeResponse) -> Result<GeoResult> {
    let first = response
        .places
        .first()
        .ok_or_else(|| ZipWeatherError::NoPlaces {
            postal_code: response.post_code.clone().unwrap_or_default(),
        })?;

    Ok(GeoResult {
        place_name: first.place_name.clone(),
        region_abbreviation: first.state_abbreviation.clone(),
        country_abbreviation: response.country_abbreviation.clone(),
    })
}
